//! Sesión persistida en disco para la CLI
//!
//! `local_storage.json` guarda `token` y `user`; `cookies.json` guarda la
//! cookie `token`. Ambos archivos viven en el directorio de sesión.
//!
//! Los eventos de `subscribe` solo llegan a suscriptores del mismo proceso.
//! Otro proceso `suba-admin` que cierre la sesión cambia los archivos sin
//! avisar: este proceso lo ve en el próximo `AuthGuard::check`, no a través
//! de `GuardWatcher`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

use super::repository::{SessionCookie, SessionRepository, StorageEvent, StorageKey};
use crate::utils::errors::{storage_error, AdminResult};

const LOCAL_STORAGE_FILE: &str = "local_storage.json";
const COOKIES_FILE: &str = "cookies.json";
const COOKIE_NAME: &str = "token";
const EVENT_CAPACITY: usize = 32;

pub struct FileSessionRepository {
    dir: PathBuf,
    // Serializa los ciclos leer-modificar-escribir
    lock: Mutex<()>,
    events: broadcast::Sender<StorageEvent>,
}

impl FileSessionRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            dir: dir.into(),
            lock: Mutex::new(()),
            events,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn local_storage_path(&self) -> PathBuf {
        self.dir.join(LOCAL_STORAGE_FILE)
    }

    fn cookies_path(&self) -> PathBuf {
        self.dir.join(COOKIES_FILE)
    }

    fn notify(&self, event: StorageEvent) {
        let _ = self.events.send(event);
    }

    async fn read_map<T: DeserializeOwned>(&self, path: &Path) -> AdminResult<BTreeMap<String, T>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                storage_error(&format!("Archivo de sesión corrupto {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map<T: Serialize>(&self, path: &Path, map: &BTreeMap<String, T>) -> AdminResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let content = serde_json::to_string_pretty(map)?;
        tokio::fs::write(path, content).await?;
        debug!("💾 Sesión escrita en {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn get_item(&self, key: StorageKey) -> AdminResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let map: BTreeMap<String, String> = self.read_map(&self.local_storage_path()).await?;
        Ok(map.get(key.as_str()).cloned())
    }

    async fn set_item(&self, key: StorageKey, value: &str) -> AdminResult<()> {
        let _guard = self.lock.lock().await;
        let path = self.local_storage_path();
        let mut map: BTreeMap<String, String> = self.read_map(&path).await?;
        let previous = map.insert(key.as_str().to_string(), value.to_string());
        self.write_map(&path, &map).await?;
        if previous.as_deref() != Some(value) {
            self.notify(StorageEvent::Item(key));
        }
        Ok(())
    }

    async fn remove_item(&self, key: StorageKey) -> AdminResult<()> {
        let _guard = self.lock.lock().await;
        let path = self.local_storage_path();
        let mut map: BTreeMap<String, String> = self.read_map(&path).await?;
        if map.remove(key.as_str()).is_some() {
            self.write_map(&path, &map).await?;
            self.notify(StorageEvent::Item(key));
        }
        Ok(())
    }

    async fn get_cookie(&self) -> AdminResult<Option<SessionCookie>> {
        let _guard = self.lock.lock().await;
        let map: BTreeMap<String, SessionCookie> = self.read_map(&self.cookies_path()).await?;
        Ok(map.get(COOKIE_NAME).cloned())
    }

    async fn set_cookie(&self, cookie: SessionCookie) -> AdminResult<()> {
        let _guard = self.lock.lock().await;
        let path = self.cookies_path();
        let mut map: BTreeMap<String, SessionCookie> = self.read_map(&path).await?;
        map.insert(COOKIE_NAME.to_string(), cookie);
        self.write_map(&path, &map).await?;
        self.notify(StorageEvent::Cookie);
        Ok(())
    }

    async fn remove_cookie(&self) -> AdminResult<()> {
        let _guard = self.lock.lock().await;
        let path = self.cookies_path();
        let mut map: BTreeMap<String, SessionCookie> = self.read_map(&path).await?;
        if map.remove(COOKIE_NAME).is_some() {
            self.write_map(&path, &map).await?;
            self.notify(StorageEvent::Cookie);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}
