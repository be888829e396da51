use crate::domain::{
    CancelSms, CountryCode, FormatNumber, GetSms, GetSmsResponses, GetSmsSent, GetSmsStats,
    GetUserSmsResponses, MessageText, SendSms,
};

use super::Endpoint;
use super::query::Query;

impl Endpoint for SendSms {
    const PATH: &'static str = "send-sms.json";

    fn query(&self) -> Query {
        let options = self.options();
        Query::new(Self::PATH)
            .required(MessageText::FIELD, self.message())
            .param("to", self.to())
            .param("from", options.from.as_ref())
            .param("send_at", options.send_at.as_ref())
            .param("list_id", self.list_id().as_ref())
            .param("dlr_callback", options.dlr_callback.as_ref())
            .param("reply_callback", options.reply_callback.as_ref())
            .param("validity", options.validity.as_ref())
            .param("replies_to_email", options.replies_to_email.as_ref())
            .param("from_shared", options.from_shared.as_ref())
            .param(CountryCode::FIELD, options.country_code.as_ref())
    }
}

impl Endpoint for FormatNumber {
    const PATH: &'static str = "format-number.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("msisdn", &self.msisdn)
            .required(CountryCode::FIELD, &self.country_code)
    }
}

impl Endpoint for GetSms {
    const PATH: &'static str = "get-sms.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("message_id", &self.message_id)
    }
}

impl Endpoint for GetSmsStats {
    const PATH: &'static str = "get-sms-stats.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("message_id", &self.message_id)
    }
}

impl Endpoint for CancelSms {
    const PATH: &'static str = "cancel-sms.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH).required("message_id", &self.message_id)
    }
}

impl Endpoint for GetSmsResponses {
    const PATH: &'static str = "get-sms-responses.json";

    fn query(&self) -> Query {
        let options = self.options();
        Query::new(Self::PATH)
            .param("message_id", self.message_id().as_ref())
            .param("keyword_id", self.keyword_id().as_ref())
            .param("keyword", options.keyword.as_ref())
            .param("number", options.number.as_ref())
            .param("msisdn", options.msisdn.as_ref())
            .pagination(&options.pagination)
            .param("include_original", options.include_original.as_ref())
    }
}

impl Endpoint for GetUserSmsResponses {
    const PATH: &'static str = "get-user-sms-responses.json";

    fn query(&self) -> Query {
        let options = self.options();
        Query::new(Self::PATH)
            .param("start", options.start.as_ref())
            .param("end", options.end.as_ref())
            .pagination(&options.pagination)
            .param("keywords", options.keywords.as_ref())
            .param("include_original", options.include_original.as_ref())
    }
}

impl Endpoint for GetSmsSent {
    const PATH: &'static str = "get-sms-sent.json";

    fn query(&self) -> Query {
        Query::new(Self::PATH)
            .required("message_id", &self.message_id)
            .param("optouts", self.options.optouts.as_ref())
            .pagination(&self.options.pagination)
            .param("delivery", self.options.delivery.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        CallbackUrl, DeliveryStatus, KeywordId, KeywordResponses, ListId, MessageId, Msisdn,
        OptoutFilter, Pagination, SendOptions, SenderId, SmsResponsesOptions, SmsSentOptions,
        Timestamp, UserSmsResponsesOptions,
    };

    use super::*;

    fn pairs(query: &Query) -> Vec<(&str, &str)> {
        query
            .params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn send_sms_encodes_in_declared_order() {
        let options = SendOptions {
            from: Some(SenderId::new("Acme").unwrap()),
            send_at: Some(Timestamp::from_unix_seconds(1_700_000_000).unwrap()),
            dlr_callback: Some(CallbackUrl::new("https://example.com/dlr").unwrap()),
            validity: Some(0),
            from_shared: Some(false),
            country_code: Some(CountryCode::Au),
            ..Default::default()
        };
        let request = SendSms::new(
            MessageText::new("hello").unwrap(),
            Some(vec![
                Msisdn::new("61491570156").unwrap(),
                Msisdn::new("0491570157").unwrap(),
            ]),
            Some(ListId::new(12)),
            options,
        )
        .unwrap();

        let query = request.query();
        assert_eq!(query.path(), "send-sms.json");
        assert_eq!(
            pairs(&query),
            vec![
                ("message", "hello"),
                ("to", "61491570156,0491570157"),
                ("from", "Acme"),
                ("send_at", "2023-11-14 22:13:20"),
                ("list_id", "12"),
                ("dlr_callback", "https://example.com/dlr"),
                ("validity", "0"),
                ("from_shared", "false"),
                ("countrycode", "AU"),
            ]
        );
    }

    #[test]
    fn send_sms_to_list_omits_recipients() {
        let request = SendSms::to_list(
            ListId::new(3),
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        );
        assert_eq!(
            pairs(&request.query()),
            vec![("message", "hi"), ("list_id", "3")]
        );
    }

    #[test]
    fn format_number_encodes_both_params() {
        let request = FormatNumber::new(Msisdn::new("0422222222").unwrap(), CountryCode::Au);
        assert_eq!(
            pairs(&request.query()),
            vec![("msisdn", "0422222222"), ("countrycode", "AU")]
        );
    }

    #[test]
    fn message_lookups_use_message_id() {
        let id = MessageId::new(4321);
        assert_eq!(GetSms { message_id: id }.query().path(), "get-sms.json");
        assert_eq!(
            GetSmsStats { message_id: id }.query().path(),
            "get-sms-stats.json"
        );
        let cancel = CancelSms { message_id: id }.query();
        assert_eq!(cancel.path(), "cancel-sms.json");
        assert_eq!(pairs(&cancel), vec![("message_id", "4321")]);
    }

    #[test]
    fn sms_responses_encode_filters_and_paging() {
        let options = SmsResponsesOptions {
            msisdn: Some(Msisdn::new("61400000000").unwrap()),
            include_original: Some(true),
            pagination: Pagination {
                page: Some(2),
                max: None,
            },
            ..Default::default()
        };
        let request = GetSmsResponses::for_keyword(KeywordId::new(8), options).unwrap();
        assert_eq!(
            pairs(&request.query()),
            vec![
                ("keyword_id", "8"),
                ("msisdn", "61400000000"),
                ("page", "2"),
                ("include_original", "true"),
            ]
        );
    }

    #[test]
    fn user_sms_responses_encode_time_frame() {
        let request = GetUserSmsResponses::new(UserSmsResponsesOptions {
            start: Some(Timestamp::from_unix_seconds(0).unwrap()),
            keywords: Some(KeywordResponses::Omit),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            pairs(&request.query()),
            vec![("start", "1970-01-01 00:00:00"), ("keywords", "OMIT")]
        );
        assert!(
            GetUserSmsResponses::default()
                .query()
                .params()
                .is_empty()
        );
    }

    #[test]
    fn sms_sent_encodes_enum_filters() {
        let request = GetSmsSent::new(
            MessageId::new(5),
            SmsSentOptions {
                optouts: Some(OptoutFilter::Only),
                delivery: Some(DeliveryStatus::Delivered),
                pagination: Pagination::new(1, 100),
            },
        );
        assert_eq!(
            pairs(&request.query()),
            vec![
                ("message_id", "5"),
                ("optouts", "ONLY"),
                ("page", "1"),
                ("max", "100"),
                ("delivery", "DELIVERED"),
            ]
        );
    }
}
