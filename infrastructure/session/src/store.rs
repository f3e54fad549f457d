use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use business::domain::fetch::http::LOGIN_PATH;
use business::domain::fetch::services::SessionContext;

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "token";

/// Client session backed by a key-value store plus the current location.
///
/// The login flow writes the token; the fetcher only reads it.
pub struct KeyValueSession {
    store: RwLock<HashMap<String, String>>,
    location: RwLock<String>,
}

impl KeyValueSession {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            location: RwLock::new(location.into()),
        }
    }

    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TOKEN_KEY.to_string(), token.into());
    }

    pub fn clear_token(&self) {
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(TOKEN_KEY);
    }

    pub fn navigate(&self, path: impl Into<String>) {
        *self.location.write().unwrap_or_else(PoisonError::into_inner) = path.into();
    }

    pub fn location(&self) -> String {
        self.location
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionContext for KeyValueSession {
    fn current_token(&self) -> Option<String> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(TOKEN_KEY)
            .cloned()
    }

    fn current_location(&self) -> String {
        self.location()
    }

    fn redirect_to_login(&self) {
        self.navigate(LOGIN_PATH);
    }
}
