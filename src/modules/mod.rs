pub mod adoptions;
pub mod auth;
pub mod donations;
pub mod payments;
pub mod pets;
pub mod users;
