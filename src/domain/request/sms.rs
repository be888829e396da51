use crate::domain::enums::{CountryCode, DeliveryStatus, KeywordResponses, OptoutFilter};
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackUrl, Email, Keyword, KeywordId, ListId, MessageId, MessageText, Msisdn, SenderId,
    Timestamp,
};

use super::{Pagination, SEND_SMS_MAX_RECIPIENTS, ordered_range};

#[derive(Debug, Clone, Default)]
/// Optional settings for `send-sms`.
pub struct SendOptions {
    /// Caller ID. Omit to use the shared pool or your leased number.
    pub from: Option<SenderId>,
    /// Schedule the message for later.
    pub send_at: Option<Timestamp>,
    pub dlr_callback: Option<CallbackUrl>,
    pub reply_callback: Option<CallbackUrl>,
    /// Delivery window in minutes; `0` means no limit.
    pub validity: Option<u32>,
    /// Must already be authorised through `add-email`.
    pub replies_to_email: Option<Email>,
    /// Force the shared number pool even when you lease numbers.
    pub from_shared: Option<bool>,
    /// Formats local numbers in `to` into international form.
    pub country_code: Option<CountryCode>,
}

#[derive(Debug, Clone)]
/// `send-sms`: send a message to explicit numbers, a stored list, or both.
pub struct SendSms {
    message: MessageText,
    to: Option<Vec<Msisdn>>,
    list_id: Option<ListId>,
    options: SendOptions,
}

impl SendSms {
    /// Build a send request.
    ///
    /// At least one of `to` and `list_id` is required. A provided `to` must hold
    /// between 1 and [`SEND_SMS_MAX_RECIPIENTS`] numbers.
    pub fn new(
        message: MessageText,
        to: Option<Vec<Msisdn>>,
        list_id: Option<ListId>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if to.is_none() && list_id.is_none() {
            return Err(ValidationError::MissingOneOf {
                fields: &["to", "list_id"],
            });
        }
        if let Some(to) = to.as_deref() {
            if to.is_empty() {
                return Err(ValidationError::Empty { field: "to" });
            }
            crate::domain::validation::at_most("to", to, SEND_SMS_MAX_RECIPIENTS)?;
        }
        Ok(Self {
            message,
            to,
            list_id,
            options,
        })
    }

    pub fn to_numbers(
        to: Vec<Msisdn>,
        message: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        Self::new(message, Some(to), None, options)
    }

    pub fn to_list(list_id: ListId, message: MessageText, options: SendOptions) -> Self {
        Self {
            message,
            to: None,
            list_id: Some(list_id),
            options,
        }
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn to(&self) -> Option<&[Msisdn]> {
        self.to.as_deref()
    }

    pub fn list_id(&self) -> Option<ListId> {
        self.list_id
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `format-number`: validate a number and format it internationally.
pub struct FormatNumber {
    pub msisdn: Msisdn,
    pub country_code: CountryCode,
}

impl FormatNumber {
    pub fn new(msisdn: Msisdn, country_code: CountryCode) -> Self {
        Self {
            msisdn,
            country_code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `get-sms`: details of a sent message.
pub struct GetSms {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `get-sms-stats`: delivery statistics of a sent message.
pub struct GetSmsStats {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `cancel-sms`: cancel a scheduled message.
pub struct CancelSms {
    pub message_id: MessageId,
}

#[derive(Debug, Clone, Default)]
pub struct SmsResponsesOptions {
    pub keyword: Option<Keyword>,
    /// Response number; required together with `keyword`.
    pub number: Option<Msisdn>,
    /// Only replies from this mobile number.
    pub msisdn: Option<Msisdn>,
    pub include_original: Option<bool>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone)]
/// `get-sms-responses`: replies to a message or a keyword.
pub struct GetSmsResponses {
    message_id: Option<MessageId>,
    keyword_id: Option<KeywordId>,
    options: SmsResponsesOptions,
}

impl GetSmsResponses {
    /// At least one of `message_id` and `keyword_id` is required, and a
    /// `keyword` filter needs the response `number` as well.
    pub fn new(
        message_id: Option<MessageId>,
        keyword_id: Option<KeywordId>,
        options: SmsResponsesOptions,
    ) -> Result<Self, ValidationError> {
        if message_id.is_none() && keyword_id.is_none() {
            return Err(ValidationError::MissingOneOf {
                fields: &["message_id", "keyword_id"],
            });
        }
        if options.keyword.is_some() && options.number.is_none() {
            return Err(ValidationError::RequiredWith {
                field: "number",
                other: "keyword",
            });
        }
        Ok(Self {
            message_id,
            keyword_id,
            options,
        })
    }

    pub fn for_message(
        message_id: MessageId,
        options: SmsResponsesOptions,
    ) -> Result<Self, ValidationError> {
        Self::new(Some(message_id), None, options)
    }

    pub fn for_keyword(
        keyword_id: KeywordId,
        options: SmsResponsesOptions,
    ) -> Result<Self, ValidationError> {
        Self::new(None, Some(keyword_id), options)
    }

    pub fn message_id(&self) -> Option<MessageId> {
        self.message_id
    }

    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.keyword_id
    }

    pub fn options(&self) -> &SmsResponsesOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserSmsResponsesOptions {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub keywords: Option<KeywordResponses>,
    pub include_original: Option<bool>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default)]
/// `get-user-sms-responses`: all replies received in a time frame.
pub struct GetUserSmsResponses {
    options: UserSmsResponsesOptions,
}

impl GetUserSmsResponses {
    pub fn new(options: UserSmsResponsesOptions) -> Result<Self, ValidationError> {
        ordered_range(options.start, options.end)?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &UserSmsResponsesOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsSentOptions {
    pub optouts: Option<OptoutFilter>,
    pub delivery: Option<DeliveryStatus>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone)]
/// `get-sms-sent`: recipients of a message with their delivery and opt-out state.
pub struct GetSmsSent {
    pub message_id: MessageId,
    pub options: SmsSentOptions,
}

impl GetSmsSent {
    pub fn new(message_id: MessageId, options: SmsSentOptions) -> Self {
        Self {
            message_id,
            options,
        }
    }
}
