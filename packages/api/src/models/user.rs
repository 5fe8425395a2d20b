//! # User model and its update/patch companions
//!
//! Four representations of the same entity cross this crate:
//!
//! - [`User`] (server only) — the full `users` row, including the Argon2
//!   `password_hash`, loaded via [`sqlx::FromRow`] and never sent to the client.
//! - [`UserInfo`] — the client-safe projection that crosses the server-function
//!   boundary. The password is write-only and has no field here.
//! - [`UserUpdate`] — a partial update: `id` plus one `Option` per editable
//!   field. `None` means "leave the stored value alone".
//! - [`UserPatch`] — the fields an update actually changed, echoed back so the
//!   client can merge them into its local copy with [`UserPatch::apply`].

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Avatar image as a `data:` URL, if one has been uploaded.
    pub avatar: Option<String>,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Partial profile update keyed by the user's id.
///
/// Every field except `id` is optional; omitted fields keep their stored
/// values, so a client can change a name without re-sending the email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserUpdate {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

impl UserUpdate {
    /// An update that only replaces the avatar.
    pub fn avatar_only(id: String, avatar: String) -> Self {
        Self {
            id,
            name: None,
            email: None,
            password: None,
            avatar: Some(avatar),
        }
    }
}

/// The fields a successful update changed. Never contains the password.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl UserPatch {
    /// Shallow-merge this patch into a local record. Patch fields win on
    /// collision; absent fields leave the record untouched.
    pub fn apply(&self, record: &mut UserInfo) {
        if let Some(ref name) = self.name {
            record.name = name.clone();
        }
        if let Some(ref email) = self.email {
            record.email = email.clone();
        }
        if let Some(ref avatar) = self.avatar {
            record.avatar = Some(avatar.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserInfo {
        UserInfo {
            id: "42".to_string(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            avatar: Some("u1".to_string()),
        }
    }

    #[test]
    fn patch_fields_win_on_collision() {
        let mut local = record();
        let patch = UserPatch {
            name: Some("Ann B".to_string()),
            email: None,
            avatar: None,
        };
        patch.apply(&mut local);

        assert_eq!(local.name, "Ann B");
        assert_eq!(local.email, "a@x.com");
        assert_eq!(local.avatar.as_deref(), Some("u1"));
        assert_eq!(local.id, "42");
    }

    #[test]
    fn empty_patch_leaves_record_untouched() {
        let mut local = record();
        UserPatch::default().apply(&mut local);
        assert_eq!(local, record());
    }

    #[test]
    fn avatar_patch_replaces_remote_avatar() {
        let mut local = record();
        let patch = UserPatch {
            name: None,
            email: None,
            avatar: Some("data:image/png;base64,AAAA".to_string()),
        };
        patch.apply(&mut local);
        assert_eq!(local.avatar.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
