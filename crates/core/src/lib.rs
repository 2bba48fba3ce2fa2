//! Domain building blocks shared by the database and HTTP layers.
//!
//! Nothing in here touches the network or the database, so every module is
//! unit-testable in isolation.

pub mod error;
pub mod palette;
pub mod session;
pub mod types;
pub mod validation;
pub mod weekday;
