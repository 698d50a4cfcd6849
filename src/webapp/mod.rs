//! The client-side slice of the app: data loading and the UI state that
//! the browser front end keeps (wizard, filter dialog, signup form).

pub mod data;
pub mod filter;
pub mod review;
pub mod signup;
pub mod wizard;
