//! In-memory implementation of the family repository ports.
//!
//! Enforces the same uniqueness and foreign-key rules as the PostgreSQL
//! schema and can simulate an inaccessible `family_roles` table, so service
//! behaviour can be exercised without a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use family_office::domain::ports::{
    FamilyRepository, FamilyRepositoryError, FamilyRoleRepository, FamilyRoleRepositoryError,
    MembershipRepository, MembershipRepositoryError,
};
use family_office::domain::{
    Family, FamilyId, FamilyMember, FamilyMembership, FamilyRole, FamilyRoleId, User, UserFamily,
    UserId,
};

const ROLES_MISSING: &str = "relation \"family_roles\" does not exist";

#[derive(Default)]
struct State {
    users: Vec<User>,
    families: Vec<Family>,
    roles: Vec<FamilyRole>,
    memberships: Vec<FamilyMembership>,
}

impl State {
    fn role(&self, id: Option<FamilyRoleId>) -> Option<FamilyRole> {
        id.and_then(|id| self.roles.iter().find(|role| role.id == id).cloned())
    }

    fn role_exists(&self, id: Option<FamilyRoleId>) -> bool {
        id.is_none_or(|id| self.roles.iter().any(|role| role.id == id))
    }
}

/// Shared store implementing every driven port.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    roles_inaccessible: AtomicBool,
}

impl InMemoryStore {
    /// Store seeded with the four standard roles.
    pub fn with_standard_roles() -> Self {
        let store = Self::default();
        for name in ["Parent", "Child", "Trustee", "Advisor"] {
            store.add_role(name);
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }

    fn roles_available(&self) -> bool {
        !self.roles_inaccessible.load(Ordering::SeqCst)
    }

    /// Insert a user row and return its id.
    pub fn add_user(&self, first_name: &str, last_name: &str) -> UserId {
        let now = Utc::now();
        let user = User {
            id: UserId::random(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
            phone: None,
            status: "active".to_owned(),
            role: None,
            created_at: now,
            updated_at: now,
        };
        let id = user.id;
        self.lock().users.push(user);
        id
    }

    /// Insert a role row and return its id.
    pub fn add_role(&self, name: &str) -> FamilyRoleId {
        let now = Utc::now();
        let role = FamilyRole {
            id: FamilyRoleId::random(),
            name: name.to_owned(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let id = role.id;
        self.lock().roles.push(role);
        id
    }

    /// Look up a seeded role by name.
    pub fn role_id(&self, name: &str) -> Option<FamilyRoleId> {
        self.lock()
            .roles
            .iter()
            .find(|role| role.name == name)
            .map(|role| role.id)
    }

    /// Make every query touching `family_roles` fail.
    pub fn make_roles_inaccessible(&self) {
        self.roles_inaccessible.store(true, Ordering::SeqCst);
    }

    /// Snapshot of the stored membership rows.
    pub fn memberships(&self) -> Vec<FamilyMembership> {
        self.lock().memberships.clone()
    }
}

#[async_trait]
impl FamilyRepository for InMemoryStore {
    async fn list_families(&self) -> Result<Vec<Family>, FamilyRepositoryError> {
        let mut families = self.lock().families.clone();
        families.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(families)
    }

    async fn find_by_id(&self, id: &FamilyId) -> Result<Option<Family>, FamilyRepositoryError> {
        Ok(self
            .lock()
            .families
            .iter()
            .find(|family| family.id == *id)
            .cloned())
    }

    async fn insert(&self, family: &Family) -> Result<Family, FamilyRepositoryError> {
        let mut state = self.lock();
        if state.families.iter().any(|existing| existing.id == family.id) {
            return Err(FamilyRepositoryError::query("duplicate family id"));
        }
        state.families.push(family.clone());
        Ok(family.clone())
    }
}

#[async_trait]
impl FamilyRoleRepository for InMemoryStore {
    async fn list_roles(&self) -> Result<Vec<FamilyRole>, FamilyRoleRepositoryError> {
        if !self.roles_available() {
            return Err(FamilyRoleRepositoryError::query(ROLES_MISSING));
        }
        let mut roles = self.lock().roles.clone();
        roles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(roles)
    }
}

#[async_trait]
impl MembershipRepository for InMemoryStore {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserFamily>, MembershipRepositoryError> {
        if !self.roles_available() {
            return Err(MembershipRepositoryError::query(ROLES_MISSING));
        }
        let state = self.lock();
        Ok(state
            .memberships
            .iter()
            .filter(|membership| membership.user_id == *user_id)
            .filter_map(|membership| {
                let family = state
                    .families
                    .iter()
                    .find(|family| family.id == membership.family_id)?;
                Some(UserFamily {
                    family: family.clone(),
                    family_role: state.role(membership.family_role_id),
                })
            })
            .collect())
    }

    async fn list_for_family(
        &self,
        family_id: &FamilyId,
    ) -> Result<Vec<FamilyMember>, MembershipRepositoryError> {
        if !self.roles_available() {
            return Err(MembershipRepositoryError::query(ROLES_MISSING));
        }
        let state = self.lock();
        Ok(state
            .memberships
            .iter()
            .filter(|membership| membership.family_id == *family_id)
            .filter_map(|membership| {
                let user = state
                    .users
                    .iter()
                    .find(|user| user.id == membership.user_id)?;
                Some(FamilyMember {
                    user: user.clone(),
                    family_role: state.role(membership.family_role_id),
                })
            })
            .collect())
    }

    async fn insert(
        &self,
        membership: &FamilyMembership,
    ) -> Result<FamilyMembership, MembershipRepositoryError> {
        let mut state = self.lock();
        if state.memberships.iter().any(|existing| {
            existing.user_id == membership.user_id && existing.family_id == membership.family_id
        }) {
            return Err(MembershipRepositoryError::duplicate_membership());
        }
        if !state.users.iter().any(|user| user.id == membership.user_id) {
            return Err(MembershipRepositoryError::unknown_user());
        }
        if !state
            .families
            .iter()
            .any(|family| family.id == membership.family_id)
        {
            return Err(MembershipRepositoryError::unknown_family());
        }
        if !state.role_exists(membership.family_role_id) {
            return Err(MembershipRepositoryError::unknown_role());
        }
        state.memberships.push(membership.clone());
        Ok(membership.clone())
    }

    async fn update_role(
        &self,
        user_id: &UserId,
        family_id: &FamilyId,
        family_role_id: Option<FamilyRoleId>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<FamilyMembership>, MembershipRepositoryError> {
        let mut state = self.lock();
        let Some(index) = state
            .memberships
            .iter()
            .position(|row| row.user_id == *user_id && row.family_id == *family_id)
        else {
            return Ok(None);
        };
        if !state.role_exists(family_role_id) {
            return Err(MembershipRepositoryError::unknown_role());
        }
        let Some(row) = state.memberships.get_mut(index) else {
            return Ok(None);
        };
        row.family_role_id = family_role_id;
        row.updated_at = updated_at;
        Ok(Some(row.clone()))
    }

    async fn delete(
        &self,
        user_id: &UserId,
        family_id: &FamilyId,
    ) -> Result<bool, MembershipRepositoryError> {
        let mut state = self.lock();
        let before = state.memberships.len();
        state
            .memberships
            .retain(|row| !(row.user_id == *user_id && row.family_id == *family_id));
        Ok(state.memberships.len() != before)
    }
}
