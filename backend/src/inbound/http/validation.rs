//! Shared validation helpers for inbound HTTP adapters.
//!
//! Identifiers arrive as optional strings so a missing field and a malformed
//! one produce distinct `details.code` values.

use serde_json::json;

use crate::domain::{Error, FamilyRoleId, IdentifierError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const USER_ID: FieldName = FieldName::new("userId");
pub(crate) const FAMILY_ID: FieldName = FieldName::new("familyId");
pub(crate) const FAMILY_ROLE_ID: FieldName = FieldName::new("familyRoleId");
pub(crate) const NAME: FieldName = FieldName::new("name");

/// UI sentinel meaning "member with no specific role".
const NO_ROLE_SENTINEL: &str = "none";

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

/// Parse a required identifier field.
///
/// Absent and blank values are reported as missing; anything else that is
/// not a UUID is reported as invalid.
pub(crate) fn parse_required_id<T>(value: Option<String>, field: FieldName) -> Result<T, Error>
where
    T: TryFrom<String, Error = IdentifierError>,
{
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    let shown = raw.clone();
    T::try_from(raw).map_err(|err| match err {
        IdentifierError::Empty { .. } => missing_field_error(field),
        IdentifierError::Invalid { .. } => invalid_uuid_error(field, &shown),
    })
}

/// Translate the optional `familyRoleId` field into a domain value.
///
/// `null`, an absent field, an empty string and `"none"` in any case all mean
/// no role. This is the only place the sentinel is recognised.
pub(crate) fn normalize_family_role_id(
    value: Option<String>,
) -> Result<Option<FamilyRoleId>, Error> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_ROLE_SENTINEL) {
        return Ok(None);
    }
    FamilyRoleId::new(trimmed)
        .map(Some)
        .map_err(|_| invalid_uuid_error(FAMILY_ROLE_ID, &raw))
}
