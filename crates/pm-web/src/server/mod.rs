//! Development server: demo pages plus mocks of the two endpoints the
//! enhancement bundle calls.

pub mod config;
mod pages;
mod routes;

pub use routes::{SELFIE_STATUS_PATH, router};
