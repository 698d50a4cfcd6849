pub mod pet;
pub mod place;
pub mod user;
