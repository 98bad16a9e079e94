//! Builders and a fixed clock shared by domain unit tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use super::{Family, FamilyId, FamilyRole, FamilyRoleId, User, UserId};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("fixture timestamp is unambiguous")
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

pub(crate) fn sample_family(name: &str) -> Family {
    Family {
        id: FamilyId::random(),
        name: Some(name.to_owned()),
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

pub(crate) fn sample_role(name: &str) -> FamilyRole {
    FamilyRole {
        id: FamilyRoleId::random(),
        name: name.to_owned(),
        description: None,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

pub(crate) fn sample_user(first_name: &str) -> User {
    User {
        id: UserId::random(),
        first_name: first_name.to_owned(),
        last_name: "Doe".to_owned(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: None,
        status: "active".to_owned(),
        role: None,
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}
