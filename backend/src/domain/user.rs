//! User identity as seen by the family layer.
//!
//! Users are owned by the user-management subsystem. This layer only reads
//! them when listing the members of a family, so the type is a plain record
//! with no constructors enforcing profile rules.

use chrono::{DateTime, Utc};

use super::identifier::uuid_identifier;

uuid_identifier! {
    /// Stable user identifier.
    UserId => "user id"
}

/// Profile row for a registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Account status label, e.g. `active` or `invited`.
    pub status: String,
    /// Application-level role label, unrelated to family roles.
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// First and last name joined for display, skipping blank parts.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use family_office::domain::{User, UserId};
    ///
    /// let now = Utc::now();
    /// let user = User {
    ///     id: UserId::random(),
    ///     first_name: "Jane".into(),
    ///     last_name: "".into(),
    ///     email: "jane@example.com".into(),
    ///     phone: None,
    ///     status: "active".into(),
    ///     role: None,
    ///     created_at: now,
    ///     updated_at: now,
    /// };
    /// assert_eq!(user.full_name(), "Jane");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
