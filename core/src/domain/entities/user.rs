//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::otp_entry::PendingRegistration;

/// User entity owned by the persistent store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Canonical phone number (`+998...`), unique across users
    pub phone: String,

    pub first_name: String,

    pub last_name: String,

    /// bcrypt hash of the password chosen at registration
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the phone number has been confirmed with an OTP
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(
        phone: String,
        first_name: String,
        last_name: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone,
            first_name,
            last_name,
            password_hash,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a verified user from registration data captured at OTP issuance
    pub fn from_pending(phone: String, pending: PendingRegistration) -> Self {
        let mut user = Self::new(
            phone,
            pending.first_name,
            pending.last_name,
            pending.password_hash,
        );
        user.is_verified = true;
        user
    }

    /// Marks the user as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the names that are provided, keeping the others
    pub fn update_names(&mut self, first_name: Option<String>, last_name: Option<String>) {
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        self.updated_at = Utc::now();
    }

    /// Public view of the account
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            phone: self.phone.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_verified: self.is_verified,
            created_at: self.created_at,
        }
    }
}

/// Profile fields exposed to the account owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}
