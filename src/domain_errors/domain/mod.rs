pub mod error;
pub mod kind;
pub mod registry;
