//! Users API Client
//!
//! The [`UserStore`] trait is the seam between the reducer and the remote
//! users resource. [`HttpUserStore`] is the reqwest implementation used by
//! the front-end; tests substitute in-memory stores.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::{Draft, User, UserId};

/// Remote CRUD operations on users.
///
/// One request per call: no retries, no timeout override. Futures are not
/// required to be `Send` because the browser client runs on a single thread.
#[async_trait(?Send)]
pub trait UserStore {
    /// Fetch every user, in server order
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Create a user from a draft; the server assigns the id
    async fn create(&self, draft: &Draft) -> StoreResult<User>;

    /// Overwrite the user with `id`
    async fn update(&self, id: &UserId, draft: &Draft) -> StoreResult<User>;

    /// Delete the user with `id`
    async fn delete(&self, id: &UserId) -> StoreResult<()>;
}

// ========================
// Envelope Fields
// ========================

const USERS_FIELD: &str = "users";
const NEW_USER_FIELD: &str = "newUser";
const UPDATED_USER_FIELD: &str = "updatedUser";

#[derive(Serialize)]
struct UpdateUserBody<'a> {
    id: &'a UserId,
    name: &'a str,
    email: &'a str,
}

/// Users API over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpUserStore {
    client: Client,
    config: ClientConfig,
}

impl HttpUserStore {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        log::info!("[UserStore] Using users API at {}", config.users_url());
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and reject non-2xx answers
    async fn send(&self, request: RequestBuilder, url: &Url) -> StoreResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn read_json(response: Response) -> StoreResult<Value> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl UserStore for HttpUserStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        let url = self.config.users_url();
        log::debug!("[UserStore] GET {}", url);
        let response = self.send(self.client.get(url.clone()), url).await?;
        let body = response.text().await?;
        users_from_body(&body)
    }

    async fn create(&self, draft: &Draft) -> StoreResult<User> {
        let url = self.config.users_url();
        log::debug!("[UserStore] POST {}", url);
        let request = self.client.post(url.clone()).json(draft);
        let body = Self::read_json(self.send(request, url).await?).await?;
        take_payload(body, NEW_USER_FIELD)
    }

    async fn update(&self, id: &UserId, draft: &Draft) -> StoreResult<User> {
        let url = self.config.user_url(id)?;
        log::debug!("[UserStore] PUT {}", url);
        let request = self.client.put(url.clone()).json(&UpdateUserBody {
            id,
            name: &draft.name,
            email: &draft.email,
        });
        let body = Self::read_json(self.send(request, &url).await?).await?;
        take_payload(body, UPDATED_USER_FIELD)
    }

    async fn delete(&self, id: &UserId) -> StoreResult<()> {
        let url = self.config.user_url(id)?;
        log::debug!("[UserStore] DELETE {}", url);
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}

/// Unwrap `{ users: [...] }`.
///
/// Anything short of a `users` array (non-JSON body, missing or null field,
/// wrong type) reads as an empty list. Entries inside the array must still be
/// valid users.
fn users_from_body(body: &str) -> StoreResult<Vec<User>> {
    let mut envelope = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[UserStore] List response is not JSON ({}), treating as empty", e);
            return Ok(Vec::new());
        }
    };

    match envelope.get_mut(USERS_FIELD).map(Value::take) {
        Some(users @ Value::Array(_)) => Ok(serde_json::from_value(users)?),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(other) => {
            log::warn!("[UserStore] `{}` is not an array: {}, treating as empty", USERS_FIELD, other);
            Ok(Vec::new())
        }
    }
}

/// Pull a required payload out of its envelope field.
fn take_payload<T: DeserializeOwned>(mut envelope: Value, field: &'static str) -> StoreResult<T> {
    match envelope.get_mut(field).map(Value::take) {
        Some(Value::Null) | None => Err(StoreError::MissingField { field }),
        Some(payload) => Ok(serde_json::from_value(payload)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_users_from_body_reads_array() {
        let users = users_from_body(r#"{"users":[{"id":1,"name":"Ana","email":"ana@x.com"},{"id":"b","name":"Bo","email":"bo@x.com"}]}"#).unwrap();
        assert_eq!(users, vec![User::new(1, "Ana", "ana@x.com"), User::new("b", "Bo", "bo@x.com")]);
    }

    #[test]
    fn test_users_from_body_is_permissive_about_envelope() {
        for body in ["{}", r#"{"users":null}"#, r#"{"users":{"id":1}}"#, "[]", "not json", ""] {
            assert_eq!(users_from_body(body).unwrap(), Vec::<User>::new(), "body: {body:?}");
        }
    }

    #[test]
    fn test_users_from_body_keeps_wide_ids() {
        let users = users_from_body(r#"{"users":[{"id":18446744073709551615,"name":"Ana","email":"ana@x.com"},{"id":1.5,"name":"Bo","email":"bo@x.com"}]}"#).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId::from(u64::MAX));
        assert_eq!(users[1].id.to_string(), "1.5");
    }

    #[test]
    fn test_users_from_body_rejects_broken_entries() {
        let result = users_from_body(r#"{"users":[{"name":"no id"}]}"#);
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_take_payload_requires_field() {
        let result = take_payload::<User>(json!({"user": {"id": 1}}), NEW_USER_FIELD);
        assert!(matches!(result, Err(StoreError::MissingField { field: "newUser" })));

        let result = take_payload::<User>(json!({"newUser": null}), NEW_USER_FIELD);
        assert!(matches!(result, Err(StoreError::MissingField { .. })));

        let user: User = take_payload(json!({"newUser": {"id": 7, "name": "Ana", "email": "ana@x.com"}}), NEW_USER_FIELD).unwrap();
        assert_eq!(user, User::new(7, "Ana", "ana@x.com"));
    }

    #[test]
    fn test_update_body_carries_id() {
        let id = UserId::from(7);
        let body = UpdateUserBody { id: &id, name: "Ana B.", email: "ana@x.com" };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"id": 7, "name": "Ana B.", "email": "ana@x.com"}));
    }
}
