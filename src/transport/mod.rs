//! Transport layer: wire-format details (query serialization, error bodies).

mod email;
mod error_body;
mod keywords;
mod lists;
mod numbers;
mod query;
mod reseller;
mod sms;

pub use error_body::classify;
pub use query::Query;

/// One remote operation: its path and how its request becomes query parameters.
pub trait Endpoint {
    const PATH: &'static str;

    fn query(&self) -> Query;
}
