use crate::domain::enums::{CountryCode, MemberSelection};
use crate::domain::validation::{ValidationError, at_most, non_blank};
use crate::domain::value::{ListId, Msisdn};

use super::{CustomFields, LIST_MAX_CUSTOM_FIELDS, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `remove-list`: delete a list and all of its members.
pub struct RemoveList {
    pub list_id: ListId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `get-list`: list metadata plus a page of its members.
pub struct GetList {
    pub list_id: ListId,
    pub members: Option<MemberSelection>,
    pub pagination: Pagination,
}

impl GetList {
    pub fn new(list_id: ListId) -> Self {
        Self {
            list_id,
            members: None,
            pagination: Pagination::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// `get-lists`: metadata of all lists.
pub struct GetLists {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `add-list`: create a list, naming its custom field slots in order.
pub struct AddList {
    name: String,
    field_names: Vec<String>,
}

impl AddList {
    /// `field_names[0]` names slot 1 and so on; at most
    /// [`LIST_MAX_CUSTOM_FIELDS`] names, none of them blank.
    pub fn new(
        name: impl Into<String>,
        field_names: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = non_blank("name", name)?;
        at_most("field", &field_names, LIST_MAX_CUSTOM_FIELDS)?;
        let field_names = field_names
            .into_iter()
            .map(|field| non_blank("field", field))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, field_names })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Member attributes shared by `add-to-list` and `edit-list-member`.
pub struct MemberDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub fields: CustomFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `add-to-list`: add a member, or update it when the number is already there.
pub struct AddToList {
    pub list_id: ListId,
    pub msisdn: Msisdn,
    pub details: MemberDetails,
    pub country_code: Option<CountryCode>,
}

impl AddToList {
    pub fn new(list_id: ListId, msisdn: Msisdn) -> Self {
        Self {
            list_id,
            msisdn,
            details: MemberDetails::default(),
            country_code: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `add-field-to-list`: add or rename custom fields of a list.
pub struct AddFieldToList {
    list_id: ListId,
    fields: CustomFields,
}

impl AddFieldToList {
    pub fn new(list_id: ListId, fields: CustomFields) -> Result<Self, ValidationError> {
        if fields.is_empty() {
            return Err(ValidationError::Empty { field: "fields" });
        }
        Ok(Self { list_id, fields })
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn fields(&self) -> &CustomFields {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `delete-from-list`: remove a member from a list (`0` means every list).
pub struct DeleteFromList {
    pub list_id: ListId,
    pub msisdn: Msisdn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `optout-list-member`: opt a member out of a list (`0` means every list).
pub struct OptoutListMember {
    pub list_id: ListId,
    pub msisdn: Msisdn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `edit-list-member`: change an existing member's attributes.
pub struct EditListMember {
    pub list_id: ListId,
    pub msisdn: Msisdn,
    pub details: MemberDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_list_trims_and_caps_field_names() {
        let list = AddList::new(" VIPs ", vec![" tier ".to_owned()]).unwrap();
        assert_eq!(list.name(), "VIPs");
        assert_eq!(list.field_names(), ["tier"]);

        let too_many = (0..=LIST_MAX_CUSTOM_FIELDS)
            .map(|idx| format!("f{idx}"))
            .collect::<Vec<_>>();
        assert!(matches!(
            AddList::new("VIPs", too_many),
            Err(ValidationError::TooMany { max: 10, .. })
        ));

        assert!(AddList::new("VIPs", vec!["ok".to_owned(), "  ".to_owned()]).is_err());
        assert!(AddList::new("  ", Vec::new()).is_err());
    }

    #[test]
    fn add_field_to_list_needs_a_field() {
        let err = AddFieldToList::new(ListId::new(1), CustomFields::new()).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "fields" });
    }
}
