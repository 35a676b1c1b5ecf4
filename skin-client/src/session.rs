// skin-client/src/session.rs
// Session storage - the one piece of state that outlives a page

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use shared::models::Role;

use crate::error::{ClientError, ClientResult};

/// Authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user_id: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Session expiring `ttl` from now; a `ttl` past the representable
    /// range never expires.
    pub fn new(token: impl Into<String>, user_id: Option<String>, roles: Vec<Role>, ttl: TimeDelta) -> Self {
        Self {
            token: token.into(),
            user_id,
            roles,
            expires_at: Utc::now().checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Where the session lives between calls
pub trait SessionStore: Send + Sync + Debug {
    fn load(&self) -> ClientResult<Option<AuthSession>>;
    fn save(&self, session: &AuthSession) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

/// In-memory store, gone with the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<AuthSession>> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, session: &AuthSession) -> ClientResult<()> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the parent directory if needed
    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    /// A missing file is no session; an unreadable one is an error.
    fn load(&self) -> ClientResult<Option<AuthSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&json)
            .map_err(|e| ClientError::Session(format!("corrupt session file {}: {e}", self.path.display())))?;
        Ok(Some(session))
    }

    fn save(&self, session: &AuthSession) -> ClientResult<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
