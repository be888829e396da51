use crate::domain::{AddEmail, DeleteEmail, Email};

use super::Endpoint;
use super::query::Query;

impl Endpoint for AddEmail {
    const PATH: &'static str = "add-email.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required(Email::FIELD, &self.email)
            .param("max_sms", self.max_sms.as_ref())
            .param("number", self.number.as_ref())
    }
}

impl Endpoint for DeleteEmail {
    const PATH: &'static str = "delete-email.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required(Email::FIELD, &self.email)
    }
}
