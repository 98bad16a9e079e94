//! Family office backend library.
//!
//! Hexagonal layout: `domain` holds the family, role and membership model
//! together with its ports and services; `inbound` adapts HTTP onto the
//! driving ports; `outbound` implements the driven ports with Diesel.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
