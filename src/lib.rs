pub mod clients;
pub mod net;
pub mod pet;
pub mod place;
pub mod repo;
pub mod types;
pub mod user;
pub mod webapp;
