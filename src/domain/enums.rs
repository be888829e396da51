//! Closed enumerations accepted by the API, each with an exhaustive wire table.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Country used to format local numbers into international form (`countrycode`).
pub enum CountryCode {
    Au,
    Nz,
    Sg,
    Gb,
    Us,
}

impl CountryCode {
    pub const FIELD: &'static str = "countrycode";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Au => "AU",
            Self::Nz => "NZ",
            Self::Sg => "SG",
            Self::Gb => "GB",
            Self::Us => "US",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which replies `get-user-sms-responses` returns (`keywords`).
pub enum KeywordResponses {
    /// Keyword responses only.
    Only,
    /// Regular campaign responses only.
    Omit,
    #[default]
    Both,
}

impl KeywordResponses {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Only => "ONLY",
            Self::Omit => "OMIT",
            Self::Both => "BOTH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// How `get-sms-sent` treats opted-out recipients (`optouts`).
pub enum OptoutFilter {
    Only,
    Omit,
    #[default]
    Include,
}

impl OptoutFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Only => "ONLY",
            Self::Omit => "OMIT",
            Self::Include => "INCLUDE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery state filter for `get-sms-sent` (`delivery`).
pub enum DeliveryStatus {
    Delivered,
    Failed,
    Pending,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "DELIVERED",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which list members `get-list` returns (`members`).
pub enum MemberSelection {
    #[default]
    Active,
    Inactive,
    All,
    None,
}

impl MemberSelection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::All => "all",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whether `get-numbers` lists leased or available numbers (`filter`).
pub enum NumberFilter {
    Owned,
    Available,
}

impl NumberFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owned => "owned",
            Self::Available => "available",
        }
    }
}

macro_rules! display_as_wire {
    ($($name:ident),* $(,)?) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_wire!(
    CountryCode,
    KeywordResponses,
    OptoutFilter,
    DeliveryStatus,
    MemberSelection,
    NumberFilter,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_provider_tokens() {
        assert_eq!(CountryCode::Gb.as_str(), "GB");
        assert_eq!(KeywordResponses::default().as_str(), "BOTH");
        assert_eq!(OptoutFilter::default().as_str(), "INCLUDE");
        assert_eq!(DeliveryStatus::Pending.to_string(), "PENDING");
        assert_eq!(MemberSelection::default().as_str(), "active");
        assert_eq!(NumberFilter::Available.to_string(), "available");
    }
}
