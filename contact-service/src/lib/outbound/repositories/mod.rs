pub mod address;
pub mod contact;
pub mod user;

pub use address::PostgresAddressRepository;
pub use contact::PostgresContactRepository;
pub use user::PostgresUserRepository;
