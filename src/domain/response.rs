use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error category reported by Burst SMS in the `error.code` field.
///
/// [`ResponseCode::Unknown`] is also used for error bodies that could not be
/// interpreted at all.
pub enum ResponseCode {
    AuthFailedNoData,
    AuthFailed,
    NotImplemented,
    OverLimit,
    FieldEmpty,
    FieldInvalid,
    NoAccess,
    KeyExists,
    NotFound,
    Unknown,
}

impl ResponseCode {
    pub const ALL: [Self; 10] = [
        Self::AuthFailedNoData,
        Self::AuthFailed,
        Self::NotImplemented,
        Self::OverLimit,
        Self::FieldEmpty,
        Self::FieldInvalid,
        Self::NoAccess,
        Self::KeyExists,
        Self::NotFound,
        Self::Unknown,
    ];

    /// Wire name as sent by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthFailedNoData => "AUTH_FAILED_NO_DATA",
            Self::AuthFailed => "AUTH_FAILED",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::OverLimit => "OVER_LIMIT",
            Self::FieldEmpty => "FIELD_EMPTY",
            Self::FieldInvalid => "FIELD_INVALID",
            Self::NoAccess => "NO_ACCESS",
            Self::KeyExists => "KEY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Map a wire name to a known code. Matching is exact (case-sensitive).
    pub fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "AUTH_FAILED_NO_DATA" => Self::AuthFailedNoData,
            "AUTH_FAILED" => Self::AuthFailed,
            "NOT_IMPLEMENTED" => Self::NotImplemented,
            "OVER_LIMIT" => Self::OverLimit,
            "FIELD_EMPTY" => Self::FieldEmpty,
            "FIELD_INVALID" => Self::FieldInvalid,
            "NO_ACCESS" => Self::NoAccess,
            "KEY_EXISTS" => Self::KeyExists,
            "NOT_FOUND" => Self::NotFound,
            "UNKNOWN" => Self::Unknown,
            _ => return None,
        })
    }

    /// Whether the credentials were missing or rejected.
    pub fn is_auth_failure(self) -> bool {
        matches!(self, Self::AuthFailedNoData | Self::AuthFailed)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code} (HTTP {http_status}): {description}")]
/// Classified failure of a completed HTTP exchange with a non-2xx status.
pub struct ApiError {
    pub code: ResponseCode,
    pub description: String,
    pub http_status: u16,
}
