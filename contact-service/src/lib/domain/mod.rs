pub mod address;
pub mod auth;
pub mod contact;
pub mod user;
pub mod validation;
