use crate::domain::{AddKeyword, EditKeyword, GetKeywords, KeywordSettings};

use super::Endpoint;
use super::query::Query;

fn keyword_query(path: &'static str, settings: &KeywordSettings) -> Query {
    let options = settings.options();
    Query::new(path)
        .required("keyword", settings.keyword())
        .required("number", settings.number())
        .param("reference", options.reference.as_deref())
        .param("list_id", options.list_id.as_ref())
        .param("welcome_message", options.welcome_message.as_deref())
        .param("members_message", options.members_message.as_deref())
        .param("activate", options.activate.as_ref())
        .param("forward_url", options.forward_url.as_ref())
        .param("forward_email", options.forward_email.as_deref())
        .param("forward_sms", options.forward_sms.as_deref())
}

impl Endpoint for AddKeyword {
    const PATH: &'static str = "add-keyword.json";

    fn query(&self) -> Query {
        keyword_query(Self::PATH, &self.0)
    }
}

impl Endpoint for EditKeyword {
    const PATH: &'static str = "edit-keyword.json";

    fn query(&self) -> Query {
        keyword_query(Self::PATH, &self.0)
    }
}

impl Endpoint for GetKeywords {
    const PATH: &'static str = "get-keywords.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .param("number", self.number.as_ref())
            .pagination(&self.pagination)
    }
}
