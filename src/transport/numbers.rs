use crate::domain::{GetNumber, GetNumbers, LeaseNumber};

use super::Endpoint;
use super::query::Query;

impl Endpoint for GetNumber {
    const PATH: &'static str = "get-number.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("number", &self.number)
    }
}

impl Endpoint for GetNumbers {
    const PATH: &'static str = "get-numbers.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .param("filter", self.filter.as_ref())
            .pagination(&self.pagination)
    }
}

impl Endpoint for LeaseNumber {
    const PATH: &'static str = "lease-number.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).param("number", self.number.as_ref())
    }
}
