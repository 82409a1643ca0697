use crate::error::{AppError, Result};
use crate::modules::user::domain::{User, UserPayload};
use crate::modules::user::repository::UserRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Store {
    users: BTreeMap<i32, User>,
    next_id: i32,
}

/// Process-local user store used in test mode.
///
/// Ids come from a counter that starts at 1 and is never rewound, so a
/// deleted id is never handed out again.
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn create(&self, payload: UserPayload) -> Result<User> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("User id space exhausted".to_string()))?;

        let user = payload.into_user(id);
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, payload: UserPayload) -> Result<Option<User>> {
        let mut store = self.store.write().await;
        match store.users.get_mut(&id) {
            Some(existing) => {
                *existing = payload.into_user(id);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut store = self.store.write().await;
        Ok(store.users.remove(&id).is_some())
    }
}
