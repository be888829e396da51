use crate::domain::enums::NumberFilter;
use crate::domain::value::Msisdn;

use super::Pagination;

#[derive(Debug, Clone, PartialEq, Eq)]
/// `get-number`: details of one leased virtual number.
pub struct GetNumber {
    pub number: Msisdn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// `get-numbers`: leased or available virtual numbers.
pub struct GetNumbers {
    pub filter: Option<NumberFilter>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `lease-number`: lease a specific number, or the next free one when unset.
pub struct LeaseNumber {
    pub number: Option<Msisdn>,
}
