//! Relation Domain Layer

use serde::{Deserialize, Serialize};

/// The three user-initiated relation kinds.
///
/// `Favorite` and `Like` target restaurants, `Follow` targets users; the
/// toggle engine's dispatch entry points take the target id untyped and
/// route it by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Favorite,
    Like,
    Follow,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Favorite => "favorite",
            RelationKind::Like => "like",
            RelationKind::Follow => "follow",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
