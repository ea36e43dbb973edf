use serde::{Deserialize, Serialize};

/// A user's role within a book club, as stored by the membership directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubRole {
    Admin,
    Moderator,
    Member,
}

impl ClubRole {
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "admin" => Some(Self::Admin),
            "moderator" => Some(Self::Moderator),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Member => "member",
        }
    }

    /// Admins and moderators manage the waiting room and skip it when joining.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }
}
