//! DTOs for decoding players backend JSON bodies.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! domain records in one pass.

use serde::Deserialize;

use crate::domain::player::{Birthday, PlayerId, PlayerRecord, Profession, Race};

/// Count endpoint body: a bare number or an object carrying `count`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum CountDto {
    Bare(u64),
    Wrapped { count: u64 },
}

impl CountDto {
    pub(super) const fn total(&self) -> u64 {
        match self {
            Self::Bare(count) | Self::Wrapped { count } => *count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PlayerRecordDto {
    pub(super) id: i64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) title: Option<String>,
    pub(super) race: Race,
    pub(super) profession: Profession,
    pub(super) level: i32,
    pub(super) birthday: i64,
    // Null or missing reads as not banned.
    #[serde(default)]
    pub(super) banned: Option<bool>,
}

impl PlayerRecordDto {
    pub(super) fn into_domain(self) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId::new(self.id),
            name: self.name,
            title: self.title.unwrap_or_default(),
            race: self.race,
            profession: self.profession,
            level: self.level,
            birthday: Birthday::from_epoch_millis(self.birthday),
            banned: self.banned.unwrap_or(false),
        }
    }
}
