pub mod pet;
pub mod place;
pub mod user;

#[cfg(test)]
pub mod memory;
