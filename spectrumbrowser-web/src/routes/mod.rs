pub mod login;
pub mod sensor;
pub mod user;
