//! Domain layer: strong types with validation and invariants (no I/O).

mod enums;
mod request;
mod response;
mod validation;
mod value;

pub use enums::{
    CountryCode, DeliveryStatus, KeywordResponses, MemberSelection, NumberFilter, OptoutFilter,
};
pub use request::{
    AddClient, AddEmail, AddFieldToList, AddKeyword, AddList, AddToList, CancelSms,
    ClientChanges, ClientOptions, CustomFields, DeleteEmail, DeleteFromList, EditClient,
    EditKeyword, EditListMember, FormatNumber, GetBalance, GetClient, GetClients, GetKeywords,
    GetList, GetLists, GetNumber, GetNumbers, GetSms, GetSmsResponses, GetSmsSent, GetSmsStats,
    GetTransaction, GetTransactions, GetUserSmsResponses, KEYWORD_MAX_FORWARDS, KeywordOptions,
    KeywordSettings, LIST_MAX_CUSTOM_FIELDS, LeaseNumber, MemberDetails, OptoutListMember,
    Pagination, RemoveList, SEND_SMS_MAX_RECIPIENTS, SendOptions, SendSms, SmsResponsesOptions,
    SmsSentOptions, TransactionsOptions, UserSmsResponsesOptions,
};
pub use response::{ApiError, ResponseCode};
pub use validation::ValidationError;
pub use value::{
    CallbackUrl, ClientId, Email, Keyword, KeywordId, ListId, MessageId, MessageText, Msisdn,
    Password, PhoneNumber, SenderId, Timestamp, TransactionId, Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::NZ), " 021 267 0129 ").unwrap();
        assert_eq!(pn.raw(), "021 267 0129");
        let msisdn: Msisdn = pn.into();
        assert_eq!(msisdn.as_str(), "64212670129");
    }

    #[test]
    fn send_to_list_is_always_valid() {
        let request = SendSms::to_list(
            ListId::new(77),
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        );
        assert_eq!(request.list_id(), Some(ListId::new(77)));
        assert!(request.to().is_none());
    }

    #[test]
    fn response_code_known_mapping() {
        assert_eq!(
            ResponseCode::from_wire("KEY_EXISTS"),
            Some(ResponseCode::KeyExists)
        );
        assert_eq!(ResponseCode::from_wire("TEAPOT"), None);
    }
}
