use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

use super::repository::{SessionCookie, SessionRepository, StorageEvent, StorageKey};
use crate::utils::errors::AdminResult;

const EVENT_CAPACITY: usize = 32;

/// Sesión en memoria, para tests y para embeber el panel en otro proceso
pub struct MemorySessionRepository {
    items: RwLock<HashMap<StorageKey, String>>,
    cookie: RwLock<Option<SessionCookie>>,
    events: broadcast::Sender<StorageEvent>,
}

impl Default for MemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            items: RwLock::new(HashMap::new()),
            cookie: RwLock::new(None),
            events,
        }
    }

    fn notify(&self, event: StorageEvent) {
        // Sin suscriptores el envío falla, y no importa
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn get_item(&self, key: StorageKey) -> AdminResult<Option<String>> {
        Ok(self.items.read().await.get(&key).cloned())
    }

    async fn set_item(&self, key: StorageKey, value: &str) -> AdminResult<()> {
        let previous = self.items.write().await.insert(key, value.to_string());
        if previous.as_deref() != Some(value) {
            self.notify(StorageEvent::Item(key));
        }
        Ok(())
    }

    async fn remove_item(&self, key: StorageKey) -> AdminResult<()> {
        if self.items.write().await.remove(&key).is_some() {
            self.notify(StorageEvent::Item(key));
        }
        Ok(())
    }

    async fn get_cookie(&self) -> AdminResult<Option<SessionCookie>> {
        Ok(self.cookie.read().await.clone())
    }

    async fn set_cookie(&self, cookie: SessionCookie) -> AdminResult<()> {
        *self.cookie.write().await = Some(cookie);
        self.notify(StorageEvent::Cookie);
        Ok(())
    }

    async fn remove_cookie(&self) -> AdminResult<()> {
        if self.cookie.write().await.take().is_some() {
            self.notify(StorageEvent::Cookie);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}
