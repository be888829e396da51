use crate::domain::validation::{ValidationError, non_blank};
use crate::domain::value::{ClientId, Email, Msisdn, Password, Timestamp, TransactionId};

use super::{Pagination, ordered_range};

fn margin(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.is_finite() || value < 0.0 => Err(ValidationError::Invalid {
            field,
            reason: "must be a finite, non-negative percentage",
        }),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `get-client`: details of a reseller client.
pub struct GetClient {
    pub client_id: ClientId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// `get-clients`: all reseller clients.
pub struct GetClients {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientOptions {
    /// Olson name such as `Australia/Sydney`.
    pub timezone: Option<String>,
    /// Whether the client is billed directly.
    pub client_pays: Option<bool>,
    /// Markup on SMS cost, in percent.
    pub sms_margin: Option<f64>,
    /// Markup on virtual number cost, in percent.
    pub number_margin: Option<f64>,
}

#[derive(Debug, Clone)]
/// `add-client`: create a reseller client account.
pub struct AddClient {
    name: String,
    contact: String,
    email: Email,
    password: Password,
    msisdn: Msisdn,
    options: ClientOptions,
}

impl AddClient {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        email: Email,
        password: Password,
        msisdn: Msisdn,
        options: ClientOptions,
    ) -> Result<Self, ValidationError> {
        let name = non_blank("name", name)?;
        let contact = non_blank("contact", contact)?;
        margin("sms_margin", options.sms_margin)?;
        margin("number_margin", options.number_margin)?;
        Ok(Self {
            name,
            contact,
            email,
            password,
            msisdn,
            options,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
/// Fields `edit-client` may change; unset fields stay as they are.
pub struct ClientChanges {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<Email>,
    pub password: Option<Password>,
    pub msisdn: Option<Msisdn>,
    pub timezone: Option<String>,
    pub client_pays: Option<bool>,
    pub sms_margin: Option<f64>,
}

#[derive(Debug, Clone)]
/// `edit-client`: update a reseller client account.
pub struct EditClient {
    client_id: ClientId,
    changes: ClientChanges,
}

impl EditClient {
    pub fn new(client_id: ClientId, changes: ClientChanges) -> Result<Self, ValidationError> {
        margin("sms_margin", changes.sms_margin)?;
        Ok(Self { client_id, changes })
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn changes(&self) -> &ClientChanges {
        &self.changes
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionsOptions {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `get-transactions`: billing transactions of a client.
pub struct GetTransactions {
    client_id: ClientId,
    options: TransactionsOptions,
}

impl GetTransactions {
    pub fn new(client_id: ClientId, options: TransactionsOptions) -> Result<Self, ValidationError> {
        ordered_range(options.start, options.end)?;
        Ok(Self { client_id, options })
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn options(&self) -> &TransactionsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `get-transaction`: one billing transaction.
pub struct GetTransaction {
    pub transaction_id: TransactionId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// `get-balance`: account balance and currency.
pub struct GetBalance;
