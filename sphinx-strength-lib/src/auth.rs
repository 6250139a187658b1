//src/auth.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Password is required")]
    PasswordRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    /// # Errors
    /// Returns the first missing-field error; blank and whitespace-only
    /// values count as missing.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty() {
            return Err(AuthError::UsernameRequired);
        }
        if self.password.trim().is_empty() {
            return Err(AuthError::PasswordRequired);
        }
        Ok(())
    }

    /// The user every successful mock login resolves to. Any non-empty
    /// credentials are accepted; there is no real authentication.
    pub fn mock_user(&self) -> User {
        User {
            id: "1".to_string(),
            username: self.username.clone(),
            email: Some(format!("{}@example.com", self.username)),
        }
    }
}

/// Session authentication state. All transitions are synchronous; the
/// simulated sign-in latency is owned by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn login_start(&mut self) {
        self.is_loading = true;
    }

    pub fn login_success(&mut self, user: User) {
        self.is_authenticated = true;
        self.user = Some(user);
        self.is_loading = false;
    }

    pub fn login_failure(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        self.is_loading = false;
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        self.is_loading = false;
    }
}
