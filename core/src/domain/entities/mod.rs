//! Domain entities representing core business objects.

pub mod otp_entry;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use otp_entry::{OtpEntry, PendingRegistration};
pub use token::{Claims, SessionToken};
pub use user::{User, UserProfile};
