// Service exports
pub mod postgres;
pub mod session;

pub use postgres::{FamilyOrder, ShelterStore, StoreError};
pub use session::{Role, SessionContext, SessionError};
