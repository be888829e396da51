use crate::domain::{
    AddClient, EditClient, GetBalance, GetClient, GetClients, GetTransaction, GetTransactions,
};

use super::Endpoint;
use super::query::Query;

impl Endpoint for GetClient {
    const PATH: &'static str = "get-client.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("client_id", &self.client_id)
    }
}

impl Endpoint for GetClients {
    const PATH: &'static str = "get-clients.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).pagination(&self.pagination)
    }
}

impl Endpoint for AddClient {
    const PATH: &'static str = "add-client.json";

    fn query(&self) -> Query {
        let options = self.options();
        Query::new(Self::PATH)
            .required("name", self.name())
            .required("contact", self.contact())
            .required("email", self.email())
            .required("password", self.password())
            .required("msisdn", self.msisdn())
            .param("timezone", options.timezone.as_deref())
            .param("client_pays", options.client_pays.as_ref())
            .param("sms_margin", options.sms_margin.as_ref())
            .param("number_margin", options.number_margin.as_ref())
    }
}

impl Endpoint for EditClient {
    const PATH: &'static str = "edit-client.json";

    fn query(&self) -> Query {
        let changes = self.changes();
        Query::new(Self::PATH)
            .required("client_id", &self.client_id())
            .param("name", changes.name.as_deref())
            .param("contact", changes.contact.as_deref())
            .param("email", changes.email.as_ref())
            .param("password", changes.password.as_ref())
            .param("msisdn", changes.msisdn.as_ref())
            .param("timezone", changes.timezone.as_deref())
            .param("client_pays", changes.client_pays.as_ref())
            .param("sms_margin", changes.sms_margin.as_ref())
    }
}

impl Endpoint for GetTransactions {
    const PATH: &'static str = "get-transactions.json";

    fn query(&self) -> Query {
        let options = self.options();
        Query::new(Self::PATH)
            .required("client_id", &self.client_id())
            .param("start", options.start.as_ref())
            .param("end", options.end.as_ref())
            .pagination(&options.pagination)
    }
}

impl Endpoint for GetTransaction {
    const PATH: &'static str = "get-transaction.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("transaction_id", &self.transaction_id)
    }
}

impl Endpoint for GetBalance {
    const PATH: &'static str = "get-balance.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
    }
}
