use crate::db::LocalStorage;
use crate::error::{BookingError, Result};
use crate::models::{LoginForm, SessionView, User};
use log::{info, warn};
use std::sync::Arc;

pub const USER_KEY: &str = "user";
pub const MOCK_USER_ID: i64 = 1;
pub const MOCK_USER_NAME: &str = "Người dùng";

/// Login only checks that both fields were filled in.
pub fn validate_login(form: &LoginForm) -> Result<()> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(BookingError::EmptyCredentials);
    }
    Ok(())
}

pub struct AuthStore {
    storage: Arc<dyn LocalStorage>,
    user: Option<User>,
    loading: bool,
}

impl AuthStore {
    /// Starts in the loading state until `restore` has read storage.
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            user: None,
            loading: true,
        }
    }

    pub fn restore(&mut self) -> Result<()> {
        self.loading = true;

        let restored = match self.storage.get_item(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Dropping unreadable session entry: {e}");
                    self.storage.remove_item(USER_KEY)?;
                    None
                }
            },
            None => None,
        };

        if let Some(user) = &restored {
            info!("Restored session for {}", user.email);
        }

        self.user = restored;
        self.loading = false;
        Ok(())
    }

    pub fn login(&mut self, form: &LoginForm) -> Result<User> {
        validate_login(form)?;

        let user = User {
            id: MOCK_USER_ID,
            email: form.email.clone(),
            name: MOCK_USER_NAME.to_string(),
        };

        self.storage
            .set_item(USER_KEY, &serde_json::to_string(&user)?)?;
        self.user = Some(user.clone());
        self.loading = false;

        info!("Logged in as {}", user.email);
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove_item(USER_KEY)?;
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.email);
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            is_authenticated: self.is_authenticated(),
            loading: self.loading,
            user: self.user.clone(),
        }
    }
}
