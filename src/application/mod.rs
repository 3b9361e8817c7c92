//! # Application Layer
//!
//! Use cases and the session state machine, coordinating the domain with
//! whatever adapters the connector layer plugs into the interfaces.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
