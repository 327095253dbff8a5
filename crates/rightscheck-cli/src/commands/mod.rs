//! Command implementations.

pub mod analyze;
pub mod ask;

pub use self::analyze::execute_analyze;
pub use self::ask::execute_ask;
