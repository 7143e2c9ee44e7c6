//! User Models
//!
//! Data structures matching the users API payloads.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::UnknownField;

/// Server-assigned user identifier.
///
/// The API hands ids out as either JSON numbers or JSON strings; both are
/// kept in their original form so they serialize back unchanged. Numbers
/// are held as [`Number`], so ids past `i64` and non-integral ids load too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(Number),
    Text(String),
}

impl Eq for UserId {}

impl Hash for UserId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            UserId::Number(n) => {
                if let Some(u) = n.as_u64() {
                    u.hash(state);
                } else if let Some(i) = n.as_i64() {
                    i.hash(state);
                } else if let Some(f) = n.as_f64() {
                    // -0.0 == 0.0, so both must hash alike
                    (f + 0.0).to_bits().hash(state);
                }
            }
            UserId::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id.into())
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        UserId::Number(id.into())
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId::Number(id.into())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_owned())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId::Text(id)
    }
}

/// User record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Editable user fields, staged before they are sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Merge one field into the draft, leaving the other untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Name => self.name = value.into(),
            Field::Email => self.email = value.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&User> for Draft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Draft field, named the way form inputs name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Name, Field::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_keeps_wire_form() {
        let numeric: User = serde_json::from_value(json!({"id": 7, "name": "Ana", "email": "ana@x.com"})).unwrap();
        assert_eq!(numeric.id, UserId::from(7));
        assert_eq!(serde_json::to_value(&numeric.id).unwrap(), json!(7));

        let text: User = serde_json::from_value(json!({"id": "65f0c1", "name": "Bo", "email": "bo@x.com"})).unwrap();
        assert_eq!(text.id, UserId::from("65f0c1"));
        assert_eq!(serde_json::to_value(&text.id).unwrap(), json!("65f0c1"));
    }

    #[test]
    fn test_wide_numeric_ids_load() {
        let big: User = serde_json::from_str(r#"{"id": 18446744073709551615, "name": "Ana", "email": "ana@x.com"}"#).unwrap();
        assert_eq!(big.id, UserId::from(u64::MAX));
        assert_eq!(big.id.to_string(), "18446744073709551615");
        assert_eq!(serde_json::to_string(&big.id).unwrap(), "18446744073709551615");

        let float: User = serde_json::from_str(r#"{"id": 2.5, "name": "Bo", "email": "bo@x.com"}"#).unwrap();
        assert_eq!(float.id.to_string(), "2.5");
        assert_eq!(serde_json::to_string(&float.id).unwrap(), "2.5");
        assert_ne!(float.id, UserId::from(2));
    }

    #[test]
    fn test_number_and_text_ids_stay_distinct() {
        use std::collections::HashSet;

        let ids: HashSet<UserId> = [UserId::from(7), UserId::from("7"), UserId::from(7i64)].into_iter().collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&UserId::from(7u64)));
    }

    #[test]
    fn test_user_without_id_is_rejected() {
        let result = serde_json::from_value::<User>(json!({"name": "Ana", "email": "ana@x.com"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let user: User = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_draft_set_leaves_other_field() {
        let mut draft = Draft::new("Ana", "ana@x.com");
        draft.set(Field::Name, "Ana B.");
        assert_eq!(draft, Draft::new("Ana B.", "ana@x.com"));
        assert_eq!(draft.get(Field::Email), "ana@x.com");
    }

    #[test]
    fn test_draft_from_user_is_a_copy() {
        let user = User::new(7, "Ana", "ana@x.com");
        let mut draft = Draft::from(&user);
        draft.set(Field::Email, "other@x.com");
        assert_eq!(user.email, "ana@x.com");
    }

    #[test]
    fn test_field_parses_input_names() {
        assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
        assert_eq!("email".parse::<Field>().unwrap(), Field::Email);
        assert_eq!("phone".parse::<Field>().unwrap_err(), UnknownField("phone".into()));
    }
}
