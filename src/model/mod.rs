pub mod election;
pub mod state;

pub use election::{Election, ElectionError};
pub use state::{Party, StateError, StateRecord};
