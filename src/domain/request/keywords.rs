use crate::domain::validation::{ValidationError, at_most};
use crate::domain::value::{CallbackUrl, Email, Keyword, ListId, Msisdn};

use super::{KEYWORD_MAX_FORWARDS, Pagination};

#[derive(Debug, Clone, Default)]
pub struct KeywordOptions {
    /// Free-form reference for your own bookkeeping.
    pub reference: Option<String>,
    /// List that people texting the keyword are added to.
    pub list_id: Option<ListId>,
    pub welcome_message: Option<String>,
    /// Sent to people already on the list.
    pub members_message: Option<String>,
    pub activate: Option<bool>,
    pub forward_url: Option<CallbackUrl>,
    pub forward_email: Option<Vec<Email>>,
    pub forward_sms: Option<Vec<Msisdn>>,
}

#[derive(Debug, Clone)]
/// Keyword configuration shared by `add-keyword` and `edit-keyword`.
///
/// Invariant: each forwarding list holds at most [`KEYWORD_MAX_FORWARDS`] entries.
pub struct KeywordSettings {
    keyword: Keyword,
    number: Msisdn,
    options: KeywordOptions,
}

impl KeywordSettings {
    pub fn new(
        keyword: Keyword,
        number: Msisdn,
        options: KeywordOptions,
    ) -> Result<Self, ValidationError> {
        if let Some(emails) = options.forward_email.as_deref() {
            at_most("forward_email", emails, KEYWORD_MAX_FORWARDS)?;
        }
        if let Some(numbers) = options.forward_sms.as_deref() {
            at_most("forward_sms", numbers, KEYWORD_MAX_FORWARDS)?;
        }
        Ok(Self {
            keyword,
            number,
            options,
        })
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    /// Virtual number the keyword lives on.
    pub fn number(&self) -> &Msisdn {
        &self.number
    }

    pub fn options(&self) -> &KeywordOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// `add-keyword`: attach a keyword to a leased number.
pub struct AddKeyword(pub KeywordSettings);

#[derive(Debug, Clone)]
/// `edit-keyword`: change an existing keyword.
pub struct EditKeyword(pub KeywordSettings);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// `get-keywords`: keywords on your account, optionally for one number.
pub struct GetKeywords {
    pub number: Option<Msisdn>,
    pub pagination: Pagination,
}
