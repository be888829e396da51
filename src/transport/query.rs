//! Query-string serialization of typed, possibly absent parameters.
//!
//! Percent-encoding is not done here; the request builder hands the pairs to
//! `url` which encodes them.

use crate::domain::{
    CallbackUrl, ClientId, CountryCode, CustomFields, DeliveryStatus, Email, Keyword, KeywordId,
    KeywordResponses, ListId, MemberSelection, MessageId, MessageText, Msisdn, NumberFilter,
    OptoutFilter, Pagination, Password, SenderId, Timestamp, TransactionId,
};

/// Canonical, locale-independent text of a value as sent on the wire.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

macro_rules! display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! as_str_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.as_str().to_owned()
                }
            }
        )*
    };
}

display_value!(
    bool,
    u32,
    u64,
    i64,
    f64,
    MessageId,
    ListId,
    KeywordId,
    ClientId,
    TransactionId,
    Timestamp,
);

as_str_value!(
    String,
    Msisdn,
    SenderId,
    Keyword,
    MessageText,
    Email,
    CallbackUrl,
    Password,
    CountryCode,
    KeywordResponses,
    OptoutFilter,
    DeliveryStatus,
    MemberSelection,
    NumberFilter,
);

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_owned()
    }
}

/// Lists travel as one comma-joined value; an empty list is an empty string.
impl<T: QueryValue> QueryValue for [T] {
    fn to_query_value(&self) -> String {
        self.iter()
            .map(QueryValue::to_query_value)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: QueryValue> QueryValue for Vec<T> {
    fn to_query_value(&self) -> String {
        self.as_slice().to_query_value()
    }
}

/// Serialize one parameter; absent values produce no entry at all.
pub fn serialize_param<V: QueryValue + ?Sized>(
    name: &str,
    value: Option<&V>,
) -> Option<(String, String)> {
    value.map(|value| (name.to_owned(), value.to_query_value()))
}

/// Wire name of a custom list field.
///
/// Slot numbers (one or two ASCII digits) are addressed as `field_<n>`, any
/// other key as `field.<name>`.
pub fn custom_field_name(key: &str) -> String {
    let slot = matches!(key.len(), 1 | 2) && key.bytes().all(|b| b.is_ascii_digit());
    if slot {
        format!("field_{key}")
    } else {
        format!("field.{key}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Endpoint path plus its serialized parameters, in insertion order.
pub struct Query {
    path: &'static str,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
        }
    }

    pub fn param<V: QueryValue + ?Sized>(mut self, name: &str, value: Option<&V>) -> Self {
        self.params.extend(serialize_param(name, value));
        self
    }

    pub fn required<V: QueryValue + ?Sized>(self, name: &str, value: &V) -> Self {
        self.param(name, Some(value))
    }

    pub fn pagination(self, pagination: &Pagination) -> Self {
        self.param("page", pagination.page.as_ref())
            .param("max", pagination.max.as_ref())
    }

    pub fn custom_fields(mut self, fields: &CustomFields) -> Self {
        for (key, value) in fields.iter() {
            self.params.push((custom_field_name(key), value.to_owned()));
        }
        self
    }

    /// `field_1`, `field_2`, ... in list order.
    pub fn numbered_fields(mut self, values: &[String]) -> Self {
        for (idx, value) in values.iter().enumerate() {
            self.params.push((format!("field_{}", idx + 1), value.clone()));
        }
        self
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
