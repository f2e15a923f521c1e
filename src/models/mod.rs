pub mod aggregate;
pub mod error;
pub mod property;
pub mod stats;
