//! Network layer - HTTP execution for the items endpoint
//!
//! The Network actor receives fetch commands and sends back exactly one
//! terminal response per fetch.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
