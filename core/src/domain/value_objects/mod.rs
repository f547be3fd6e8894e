//! Value objects representing immutable domain concepts.

pub mod phone;

pub use phone::{CanonicalPhone, DEFAULT_COUNTRY_CODE};
