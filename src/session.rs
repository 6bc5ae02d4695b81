use serde::{Deserialize, Serialize};

use crate::schema::{AuthorSnapshot, User};

/// Who the auth layer says is signed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn author(&self) -> Option<AuthorSnapshot> {
        self.user().map(User::author_snapshot)
    }
}

impl From<Option<User>> for Session {
    fn from(value: Option<User>) -> Self {
        match value {
            Some(user) => Self::Authenticated(user),
            None => Self::Anonymous,
        }
    }
}
