//! In-memory user store.
//!
//! Used when no database is configured and by the test suites. Users live
//! in a `HashMap` behind a tokio `RwLock`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, StoreError, User, UserProfile, UserStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned().map(UserProfile::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        if user.password_hash.is_empty() {
            return Err(StoreError::query("refusing to insert user without password hash"));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), StoreError> {
        self.users.write().await.remove(&id);
        Ok(())
    }
}
