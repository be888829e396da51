//! One request type per API operation.
//!
//! Constructors enforce the call-specific preconditions, so a value of any of
//! these types is always safe to send.

mod email;
mod keywords;
mod lists;
mod numbers;
mod reseller;
mod sms;

pub use email::{AddEmail, DeleteEmail};
pub use keywords::{AddKeyword, EditKeyword, GetKeywords, KeywordOptions, KeywordSettings};
pub use lists::{
    AddFieldToList, AddList, AddToList, DeleteFromList, EditListMember, GetList, GetLists,
    MemberDetails, OptoutListMember, RemoveList,
};
pub use numbers::{GetNumber, GetNumbers, LeaseNumber};
pub use reseller::{
    AddClient, ClientChanges, ClientOptions, EditClient, GetBalance, GetClient, GetClients,
    GetTransaction, GetTransactions, TransactionsOptions,
};
pub use sms::{
    CancelSms, FormatNumber, GetSms, GetSmsResponses, GetSmsSent, GetSmsStats,
    GetUserSmsResponses, SendOptions, SendSms, SmsResponsesOptions, SmsSentOptions,
    UserSmsResponsesOptions,
};

use crate::domain::validation::ValidationError;
use crate::domain::value::Timestamp;

pub const SEND_SMS_MAX_RECIPIENTS: usize = 10_000;
pub const KEYWORD_MAX_FORWARDS: usize = 10;
pub const LIST_MAX_CUSTOM_FIELDS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Page selection shared by every listing operation (`page`, `max`).
pub struct Pagination {
    pub page: Option<u32>,
    /// Results per page.
    pub max: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, max: u32) -> Self {
        Self {
            page: Some(page),
            max: Some(max),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Custom list fields keyed either by slot number (`"1"`..`"10"`) or by name.
///
/// Entries keep insertion order; inserting an existing key replaces its value
/// in place.
pub struct CustomFields(Vec<(String, String)>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field. The key is trimmed and must not be empty.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let key = crate::domain::validation::non_blank("field", key)?;
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        Ok(())
    }

    /// Chaining form of [`CustomFields::insert`].
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.insert(key, value)?;
        Ok(self)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn ordered_range(
    start: Option<Timestamp>,
    end: Option<Timestamp>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(ValidationError::InvalidRange {
            start: "start",
            end: "end",
        }),
        _ => Ok(()),
    }
}
