//! Caller identity as resolved once per request by the boundary layer.
//!
//! Services never look up "the current user" themselves; they receive a
//! [`Caller`] explicitly.

use serde::{Deserialize, Serialize};

/// Display nickname used for an absent identity.
pub const ANONYMOUS_NICKNAME: &str = "anonymous";

/// An authenticated identity issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable identity token (the provider's subject).
    pub id: String,
    /// Display nickname.
    pub nickname: String,
}

/// The caller of a single request: possibly anonymous, possibly an admin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub identity: Option<Identity>,
    pub is_admin: bool,
}

impl Caller {
    /// An unauthenticated caller.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated, non-admin caller.
    pub fn user(id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity {
                id: id.into(),
                nickname: nickname.into(),
            }),
            is_admin: false,
        }
    }

    /// An authenticated administrator.
    pub fn admin(id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::user(id, nickname)
        }
    }

    /// Identity token of the caller, `None` when anonymous.
    pub fn identity_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.id.as_str())
    }

    /// Nickname of the caller, [`ANONYMOUS_NICKNAME`] when anonymous.
    pub fn nickname(&self) -> &str {
        self.identity
            .as_ref()
            .map_or(ANONYMOUS_NICKNAME, |i| i.nickname.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Nickname shown for a stored author, [`ANONYMOUS_NICKNAME`] when absent.
pub fn display_nickname(nickname: Option<&str>) -> &str {
    nickname.unwrap_or(ANONYMOUS_NICKNAME)
}
