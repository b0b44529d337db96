//! The closed set of like reaction kinds.

use serde::{Deserialize, Serialize};

/// Reaction kind carried by a like edge. Stored as snake_case text in the
/// `likes.kind` column; the CHECK constraint in the likes migration must
/// list the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum LikeKind {
    ThumbsUp,
    Heart,
    Clap,
    Laugh,
}

impl LikeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikeKind::ThumbsUp => "thumbs_up",
            LikeKind::Heart => "heart",
            LikeKind::Clap => "clap",
            LikeKind::Laugh => "laugh",
        }
    }
}

impl std::fmt::Display for LikeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LikeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbs_up" => Ok(LikeKind::ThumbsUp),
            "heart" => Ok(LikeKind::Heart),
            "clap" => Ok(LikeKind::Clap),
            "laugh" => Ok(LikeKind::Laugh),
            other => Err(format!("unknown like kind: {other}")),
        }
    }
}
