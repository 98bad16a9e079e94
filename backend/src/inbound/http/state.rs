//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports,
//! so they can be exercised with mocks and no database.

use std::sync::Arc;

use crate::domain::ports::{FamiliesCommand, FamiliesQuery, MembershipCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub families: Arc<dyn FamiliesQuery>,
    pub families_command: Arc<dyn FamiliesCommand>,
    pub memberships: Arc<dyn MembershipCommand>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(
        families: Arc<dyn FamiliesQuery>,
        families_command: Arc<dyn FamiliesCommand>,
        memberships: Arc<dyn MembershipCommand>,
    ) -> Self {
        Self {
            families,
            families_command,
            memberships,
        }
    }
}
