use crate::domain::value::{Email, Msisdn};

#[derive(Debug, Clone, PartialEq, Eq)]
/// `add-email`: authorise an address for email-to-SMS.
pub struct AddEmail {
    pub email: Email,
    /// Daily cap on messages sent from this address.
    pub max_sms: Option<u32>,
    /// Leased number to send from.
    pub number: Option<Msisdn>,
}

impl AddEmail {
    pub fn new(email: Email) -> Self {
        Self {
            email,
            max_sms: None,
            number: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `delete-email`: revoke an email-to-SMS address.
pub struct DeleteEmail {
    pub email: Email,
}
