pub mod user;

pub use user::{AuthenticatedUser, NewUser, User, UserRole};
