//! In-memory user store for single-process deployments and local runs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use pa_core::domain::entities::user::User;
use pa_core::errors::DomainError;
use pa_core::repositories::UserRepository;

#[derive(Default)]
struct Store {
    users: HashMap<Uuid, User>,
    /// canonical phone -> user id
    by_phone: HashMap<String, Uuid>,
}

/// User repository backed by a process-local map with a unique phone index
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .by_phone
            .get(phone)
            .and_then(|id| store.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        if store.by_phone.contains_key(&user.phone) || store.users.contains_key(&user.id) {
            return Err(DomainError::Conflict {
                resource: "User".to_string(),
            });
        }

        store.by_phone.insert(user.phone.clone(), user.id);
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        let previous_phone = match store.users.get(&user.id) {
            Some(existing) => existing.phone.clone(),
            None => {
                return Err(DomainError::NotFound {
                    resource: "User".to_string(),
                })
            }
        };

        if previous_phone != user.phone {
            if store.by_phone.contains_key(&user.phone) {
                return Err(DomainError::Conflict {
                    resource: "User".to_string(),
                });
            }
            store.by_phone.remove(&previous_phone);
            store.by_phone.insert(user.phone.clone(), user.id);
        }

        user.updated_at = Utc::now();
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_unverified_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut store = self.store.write().await;

        let stale: Vec<(Uuid, String)> = store
            .users
            .values()
            .filter(|u| !u.is_verified && u.created_at < cutoff)
            .map(|u| (u.id, u.phone.clone()))
            .collect();

        for (id, phone) in &stale {
            store.users.remove(id);
            store.by_phone.remove(phone);
        }

        Ok(stale.len() as u64)
    }
}
