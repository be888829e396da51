//! Typed Rust client for the Burst SMS (Transmit SMS) HTTP API.
//!
//! The crate has three layers: a domain layer of validated request types, a
//! transport layer for wire-format details (query parameters, error bodies),
//! and a small client layer that sends one authenticated GET per call.
//!
//! ```rust,no_run
//! use burstsms::{BurstSmsClient, Config, MessageText, Msisdn, SendOptions, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BurstSmsClient::new(Config::new("api-key", "api-secret")?);
//!     let request = SendSms::to_numbers(
//!         vec![Msisdn::new("61400000000")?],
//!         MessageText::new("hello")?,
//!         SendOptions::default(),
//!     )?;
//!     let body = client.send_sms(request).await?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, BurstSmsClient, BurstSmsClientBuilder, BurstSmsError, Config,
    ConfigError, DEFAULT_API_URL, HttpRequest, HttpResponse, HttpTransport,
};
pub use domain::*;
