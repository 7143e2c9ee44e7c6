//! Client Configuration
//!
//! Where the users API lives.

use url::Url;

use crate::error::ConfigError;
use crate::model::UserId;

/// Origin used when the build does not name one.
pub const DEFAULT_API_ORIGIN: &str = "https://express-backend-beta.vercel.app";

const USERS_PATH: [&str; 2] = ["api", "users"];

/// Resolved locations of the users resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    origin: Url,
    users: Url,
}

impl ClientConfig {
    /// Parse an API origin such as `https://host` or `http://127.0.0.1:3000/prefix`.
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let origin = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            input: trimmed.to_owned(),
            source,
        })?;

        let mut users = origin.clone();
        users
            .path_segments_mut()
            .map_err(|()| ConfigError::CannotBeABase(trimmed.to_owned()))?
            .pop_if_empty()
            .extend(USERS_PATH);

        Ok(Self { origin, users })
    }

    /// Origin baked in at compile time, falling back to [`DEFAULT_API_ORIGIN`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("USER_MANAGER_API_URL").unwrap_or(DEFAULT_API_ORIGIN))
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// `<origin>/api/users`
    pub fn users_url(&self) -> &Url {
        &self.users
    }

    /// `<origin>/api/users/{id}`, with the id encoded as a single path segment.
    pub fn user_url(&self, id: &UserId) -> Result<Url, ConfigError> {
        let mut url = self.users.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::CannotBeABase(self.origin.to_string()))?
            .push(&id.to_string());
        Ok(url)
    }
}
