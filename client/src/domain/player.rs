//! Player data model.
//!
//! Records are owned by the backend; the console only holds transient copies
//! for display and editing. Field limits mirror the backend's validation and
//! are advertised on input widgets, not enforced here.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of characters in a player name.
pub const NAME_MAX_CHARS: usize = 12;
/// Maximum number of characters in a player title.
pub const TITLE_MAX_CHARS: usize = 30;
/// Lowest level advertised by the level widget.
pub const LEVEL_MIN: i32 = 0;
/// Highest level advertised by the level widget.
pub const LEVEL_MAX: i32 = 100;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Server-assigned player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse::<i64>().map(Self)
    }
}

macro_rules! player_enum {
    (
        $(#[$outer:meta])*
        $name:ident, $error:ident, $label:literal {
            $( $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            #[default]
            $( $variant ),+
        }

        impl $name {
            /// Every option, in the order the selection widget lists them.
            pub const ALL: &'static [Self] = &[$( Self::$variant ),+];

            /// Wire and display representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[doc = concat!("Parse error for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $error {
            /// The rejected input.
            pub input: String,
        }

        impl fmt::Display for $error {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("invalid ", $label, ": {}"), self.input)
            }
        }

        impl std::error::Error for $error {}

        impl FromStr for $name {
            type Err = $error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalised = value.trim().to_ascii_uppercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == normalised)
                    .ok_or_else(|| $error {
                        input: value.to_owned(),
                    })
            }
        }
    };
}

player_enum! {
    /// Player race.
    Race, ParseRaceError, "race" {
        Human => "HUMAN",
        Dwarf => "DWARF",
        Elf => "ELF",
        Orc => "ORC",
        Troll => "TROLL",
        Hobbit => "HOBBIT",
        Giant => "GIANT",
    }
}

player_enum! {
    /// Player profession.
    Profession, ParseProfessionError, "profession" {
        Warrior => "WARRIOR",
        Rogue => "ROGUE",
        Sorcerer => "SORCERER",
        Cleric => "CLERIC",
        Paladin => "PALADIN",
        Druid => "DRUID",
        Warlock => "WARLOCK",
        Nazgul => "NAZGUL",
    }
}

/// Birthday transmitted as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(i64);

impl Birthday {
    /// Wrap raw epoch milliseconds.
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Raw epoch milliseconds.
    pub const fn epoch_millis(self) -> i64 {
        self.0
    }

    /// Parse a `YYYY-MM-DD` date-input value as UTC midnight.
    ///
    /// Blank or malformed input yields `None`, which is sent as `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::domain::Birthday;
    ///
    /// let birthday = Birthday::from_iso_date("2001-01-01").expect("valid date");
    /// assert_eq!(birthday.epoch_millis(), 978_307_200_000);
    /// assert!(Birthday::from_iso_date("").is_none());
    /// ```
    pub fn from_iso_date(raw: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(Self(midnight.and_utc().timestamp_millis()))
    }

    /// UTC instant, when the value is representable.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// `YYYY-MM-DD` value used to pre-fill the date widget.
    pub fn to_iso_date(self) -> Option<String> {
        self.to_datetime()
            .map(|instant| instant.date_naive().format(ISO_DATE_FORMAT).to_string())
    }
}

/// A player as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Server-assigned identifier.
    pub id: PlayerId,
    /// Display name, at most [`NAME_MAX_CHARS`] characters.
    pub name: String,
    /// Title, at most [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Race.
    pub race: Race,
    /// Profession.
    pub profession: Profession,
    /// Level between [`LEVEL_MIN`] and [`LEVEL_MAX`].
    pub level: i32,
    /// Birthday.
    pub birthday: Birthday,
    /// Whether the player is banned.
    pub banned: bool,
}

/// Request body for create and full-replace update.
///
/// `level` and `birthday` are `None` when the widget value could not be
/// coerced; they serialise as `null` and the backend decides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    /// Display name.
    pub name: String,
    /// Title.
    pub title: String,
    /// Race.
    pub race: Race,
    /// Profession.
    pub profession: Profession,
    /// Level, if it parsed.
    pub level: Option<i32>,
    /// Birthday, if it parsed.
    pub birthday: Option<Birthday>,
    /// Whether the player is banned.
    pub banned: bool,
}
