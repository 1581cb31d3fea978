mod filter;
mod model;
pub mod password;
mod repo;

pub use filter::{UserFilter, UserUpdate};
pub use model::User;
