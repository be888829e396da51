use url::Url;

use crate::domain::{Password, Username, ValidationError};

/// Production base URL of the Burst SMS REST API.
pub const DEFAULT_API_URL: &str = "https://api.transmitsms.com";

const ENV_USERNAME: &str = "BURSTSMS_USERNAME";
const ENV_PASSWORD: &str = "BURSTSMS_PASSWORD";
const ENV_API_URL: &str = "BURSTSMS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Connection settings for [`BurstSmsClient`](crate::BurstSmsClient).
///
/// A `Config` is immutable once built. To rotate credentials, build a new one
/// and pass it to [`BurstSmsClient::with_config`](crate::BurstSmsClient::with_config).
pub struct Config {
    api_url: Url,
    username: Username,
    password: Password,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Config::from_env`].
pub enum ConfigError {
    #[error("environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

impl Config {
    /// Credentials against the production API ([`DEFAULT_API_URL`]).
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_url: parse_api_url(DEFAULT_API_URL)?,
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Point the client at a different base URL (sandbox, proxy, mock server).
    ///
    /// The URL may carry a path prefix; endpoint paths are appended to it.
    pub fn with_api_url(self, api_url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            api_url: parse_api_url(api_url)?,
            ..self
        })
    }

    /// Read `BURSTSMS_USERNAME`, `BURSTSMS_PASSWORD` and the optional
    /// `BURSTSMS_API_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar { name });

        let config = Self::new(required(ENV_USERNAME)?, required(ENV_PASSWORD)?)?;
        match lookup(ENV_API_URL) {
            Some(api_url) if !api_url.trim().is_empty() => Ok(config.with_api_url(&api_url)?),
            _ => Ok(config),
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

fn parse_api_url(input: &str) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::InvalidApiUrl {
        input: input.to_owned(),
    };

    let mut url = Url::parse(input.trim()).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
