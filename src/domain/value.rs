use std::fmt;

use chrono::{DateTime, Utc};
use phonenumber::country;

use crate::domain::validation::ValidationError;

/// Declares a string newtype that is trimmed and must not be empty.
macro_rules! trimmed_string {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Query parameter name used by Burst SMS (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            #[doc = concat!("Create a validated [`", stringify!($name), "`].")]
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Borrow the validated value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Declares a numeric identifier assigned by Burst SMS.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

trimmed_string!(
    /// Burst SMS API key, used as the HTTP Basic username.
    ///
    /// Invariant: non-empty after trimming.
    Username,
    "username"
);

trimmed_string!(
    /// Mobile number in international format without a leading `+`
    /// (`61491570156`).
    ///
    /// Invariant: non-empty after trimming. No normalization happens here; parse
    /// into [`PhoneNumber`] and convert when you need it.
    Msisdn,
    "msisdn"
);

trimmed_string!(
    /// Caller ID a message is sent from (`from`): a leased number or an
    /// alphanumeric sender name.
    SenderId,
    "from"
);

trimmed_string!(
    /// Keyword attached to a virtual number.
    Keyword,
    "keyword"
);

numeric_id!(
    /// Id of a sent or scheduled message.
    MessageId
);
numeric_id!(
    /// Id of a contact list.
    ListId
);
numeric_id!(KeywordId);
numeric_id!(
    /// Id of a reseller client account.
    ClientId
);
numeric_id!(TransactionId);

#[derive(Clone, PartialEq, Eq, Hash)]
/// Burst SMS API secret, used as the HTTP Basic password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The
/// `Debug` output never contains the secret.
pub struct Password(String);

impl Password {
    /// Configuration name of the secret (`password`).
    pub const FIELD: &'static str = "password";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming and at most [`MessageText::MAX_CHARS`]
/// characters. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by Burst SMS (`message`).
    pub const FIELD: &'static str = "message";

    /// Longest message the API accepts (four concatenated SMS parts).
    pub const MAX_CHARS: usize = 612;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = value.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual: chars,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Email address authorised for email-to-SMS or attached to a client account.
///
/// Invariant: trimmed, with a non-empty local part and domain around a single `@`.
pub struct Email(String);

impl Email {
    /// Query parameter name used by Burst SMS (`email`).
    pub const FIELD: &'static str = "email";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        match trimmed.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(ValidationError::Invalid {
                field: Self::FIELD,
                reason: "expected local@domain",
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Absolute `http`/`https` URL that Burst SMS calls back (delivery receipts,
/// replies, keyword forwarding).
pub struct CallbackUrl(String);

impl CallbackUrl {
    pub const FIELD: &'static str = "callback";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::Invalid {
            field: Self::FIELD,
            reason: "not an absolute URL",
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::Invalid {
                field: Self::FIELD,
                reason: "scheme must be http or https",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Point in time sent to Burst SMS (`send_at`, `start`, `end`).
///
/// Always UTC; serialized as `YYYY-MM-DD HH:MM:SS`.
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wire format of timestamps.
    pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Build a timestamp from Unix seconds.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, ValidationError> {
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or(ValidationError::Invalid {
                field: "timestamp",
                reason: "out of range",
            })
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[derive(Debug, Clone)]
/// Number checked against libphonenumber metadata.
///
/// Two numbers are equal when they reach the same subscriber, however they
/// were written.
pub struct PhoneNumber {
    raw: String,
    digits: String,
}

impl PhoneNumber {
    /// Numbers without a country prefix are read in `region`: `0491 570 156`
    /// in `AU` is `61491570156`.
    pub fn parse(
        region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input: String = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Msisdn::FIELD,
            });
        }

        let number = phonenumber::parse(region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        let digits = phonenumber::format(&number)
            .mode(phonenumber::Mode::E164)
            .to_string()
            .trim_start_matches('+')
            .to_owned();

        Ok(Self { raw, digits })
    }

    /// Input as given, minus surrounding whitespace.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Country code and subscriber number, no `+`.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for PhoneNumber {}

impl From<PhoneNumber> for Msisdn {
    fn from(value: PhoneNumber) -> Self {
        Self(value.digits)
    }
}
