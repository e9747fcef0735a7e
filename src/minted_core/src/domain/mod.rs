pub mod email;
pub mod identity;
pub mod password;
pub mod pending_registration;
pub mod token;
pub mod user;
