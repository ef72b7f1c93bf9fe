//! Member - Member Record Data

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable member identifier.
///
/// Decodes from a JSON string or integer; integers are kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Signed(id) => Self(id.to_string()),
            RawId::Unsigned(id) => Self(id.to_string()),
        })
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A member record as served by the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique ID
    pub id: MemberId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role label (e.g. "admin", "member")
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Get an editable field
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    /// Replace an editable field
    pub fn set_field(&mut self, field: MemberField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MemberField::Name => self.name = value,
            MemberField::Email => self.email = value,
            MemberField::Role => self.role = value,
        }
    }

    /// Case-insensitive substring match on the name
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}

/// Fields editable from the edit dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    pub const ALL: [MemberField; 3] = [MemberField::Name, MemberField::Email, MemberField::Role];

    /// Translation key under the `members` namespace
    pub fn label_key(self) -> &'static str {
        match self {
            MemberField::Name => "name",
            MemberField::Email => "email",
            MemberField::Role => "role",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_remote_payload_ignoring_extra_fields() {
        let body = r#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin","team":"x"}
        ]"#;
        let members: Vec<Member> = serde_json::from_str(body).expect("decode");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, MemberId::from("1"));
        assert_eq!(members[1].role, "admin");
    }

    #[test]
    fn decodes_integer_ids_as_text() {
        let body = r#"[
            {"id":1,"name":"A","email":"a@x.io","role":"admin"},
            {"id":"2","name":"B","email":"b@x.io","role":"member"}
        ]"#;
        let members: Vec<Member> = serde_json::from_str(body).expect("decode");
        assert_eq!(members[0].id, MemberId::from("1"));
        assert_eq!(members[1].id, MemberId::from("2"));
    }

    #[test]
    fn rejects_non_scalar_id() {
        let body = r#"[{"id":{"n":1},"name":"A","email":"a@x.io","role":"admin"}]"#;
        assert!(serde_json::from_str::<Vec<Member>>(body).is_err());
    }

    #[test]
    fn rejects_record_missing_required_field() {
        let body = r#"[{"id":"1","name":"Aaron Miles","role":"member"}]"#;
        assert!(serde_json::from_str::<Vec<Member>>(body).is_err());
    }

    #[test]
    fn name_match_is_case_insensitive_and_name_only() {
        let m = Member::new("1", "Alice", "bob@example.com", "admin");
        assert!(m.name_matches("al"));
        assert!(m.name_matches(""));
        assert!(!m.name_matches("bob"));
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let mut m = Member::new("1", "Alice", "alice@example.com", "admin");
        m.set_field(MemberField::Email, "a@example.com");
        assert_eq!(m.field(MemberField::Email), "a@example.com");
        assert_eq!(m.name, "Alice");
        assert_eq!(m.role, "admin");
    }
}
