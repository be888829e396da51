use crate::domain::{
    AddFieldToList, AddList, AddToList, CountryCode, DeleteFromList, EditListMember, GetList,
    GetLists, MemberDetails, OptoutListMember, RemoveList,
};

use super::Endpoint;
use super::query::Query;

fn with_member_details(query: Query, details: &MemberDetails) -> Query {
    query
        .param("first_name", details.first_name.as_deref())
        .param("last_name", details.last_name.as_deref())
        .custom_fields(&details.fields)
}

impl Endpoint for RemoveList {
    const PATH: &'static str = "remove-list.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("list_id", &self.list_id)
    }
}

impl Endpoint for GetList {
    const PATH: &'static str = "get-list.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("list_id", &self.list_id)
            .param("members", self.members.as_ref())
            .pagination(&self.pagination)
    }
}

impl Endpoint for GetLists {
    const PATH: &'static str = "get-lists.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).pagination(&self.pagination)
    }
}

impl Endpoint for AddList {
    const PATH: &'static str = "add-list.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("name", self.name())
            .numbered_fields(self.field_names())
    }
}

impl Endpoint for AddToList {
    const PATH: &'static str = "add-to-list.json";

    fn query(&self) -> Query {
        let query = Query::new(Self::PATH)
            .required("list_id", &self.list_id)
            .required("msisdn", &self.msisdn);
        with_member_details(query, &self.details)
            .param(CountryCode::FIELD, self.country_code.as_ref())
    }
}

impl Endpoint for AddFieldToList {
    const PATH: &'static str = "add-field-to-list.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("list_id", &self.list_id())
            .custom_fields(self.fields())
    }
}

impl Endpoint for DeleteFromList {
    const PATH: &'static str = "delete-from-list.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("list_id", &self.list_id)
            .required("msisdn", &self.msisdn)
    }
}

impl Endpoint for OptoutListMember {
    const PATH: &'static str = "optout-list-member.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("list_id", &self.list_id)
            .required("msisdn", &self.msisdn)
    }
}

impl Endpoint for EditListMember {
    const PATH: &'static str = "edit-list-member.json";

    fn query(&self) -> Query {
        let query = Query::new(Self::PATH)
            .required("list_id", &self.list_id)
            .required("msisdn", &self.msisdn);
        with_member_details(query, &self.details)
    }
}
