//! Widget-level player form shared by the create form and row editing.
//!
//! A [`PlayerForm`] stores what the input widgets hold: free text for level
//! and birthday, a choice for race, profession and banned. Coercion into a
//! [`PlayerDraft`] happens on submit. The only constraint applied while
//! typing is the text `maxlength`; everything else is left to the backend.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::player::{
    Birthday, NAME_MAX_CHARS, ParseProfessionError, ParseRaceError, PlayerDraft, PlayerRecord,
    Profession, Race, TITLE_MAX_CHARS,
};

/// Editable player fields, named as the form inputs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Name,
    Title,
    Race,
    Profession,
    Level,
    Birthday,
    Banned,
}

impl PlayerField {
    /// Every field, in table column order.
    pub const ALL: &'static [Self] = &[
        Self::Name,
        Self::Title,
        Self::Race,
        Self::Profession,
        Self::Level,
        Self::Birthday,
        Self::Banned,
    ];

    /// Input name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Race => "race",
            Self::Profession => "profession",
            Self::Level => "level",
            Self::Birthday => "birthday",
            Self::Banned => "banned",
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerField {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == normalised)
            .ok_or_else(|| FormError::UnknownField {
                input: value.to_owned(),
            })
    }
}

/// Rejected widget input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field '{input}'; expected one of name, title, race, profession, level, birthday, banned")]
    UnknownField { input: String },
    #[error(transparent)]
    Race(#[from] ParseRaceError),
    #[error(transparent)]
    Profession(#[from] ParseProfessionError),
    #[error("invalid banned flag '{input}'; expected true or false")]
    Banned { input: String },
}

/// Values currently held by a set of player input widgets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerForm {
    name: String,
    title: String,
    race: Race,
    profession: Profession,
    level: String,
    birthday: String,
    banned: bool,
}

impl PlayerForm {
    /// A form with every widget at its initial value.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-fill widgets from a fetched record.
    ///
    /// The date widget receives the ISO date derived from the typed
    /// birthday, never the localised display text.
    pub fn from_record(record: &PlayerRecord) -> Self {
        Self {
            name: record.name.clone(),
            title: record.title.clone(),
            race: record.race,
            profession: record.profession,
            level: record.level.to_string(),
            birthday: record.birthday.to_iso_date().unwrap_or_default(),
            banned: record.banned,
        }
    }

    /// Update one widget from raw text.
    ///
    /// Text widgets keep at most their `maxlength` characters. Choice widgets
    /// only accept one of their options.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] when a choice widget receives a value it does
    /// not offer.
    pub fn set(&mut self, field: PlayerField, raw: &str) -> Result<(), FormError> {
        match field {
            PlayerField::Name => self.name = clip_chars(raw, NAME_MAX_CHARS),
            PlayerField::Title => self.title = clip_chars(raw, TITLE_MAX_CHARS),
            PlayerField::Race => self.race = raw.parse()?,
            PlayerField::Profession => self.profession = raw.parse()?,
            PlayerField::Level => raw.clone_into(&mut self.level),
            PlayerField::Birthday => raw.clone_into(&mut self.birthday),
            PlayerField::Banned => self.banned = parse_flag(raw)?,
        }
        Ok(())
    }

    /// Current value of a widget, rendered as text.
    pub fn value(&self, field: PlayerField) -> String {
        match field {
            PlayerField::Name => self.name.clone(),
            PlayerField::Title => self.title.clone(),
            PlayerField::Race => self.race.as_str().to_owned(),
            PlayerField::Profession => self.profession.as_str().to_owned(),
            PlayerField::Level => self.level.clone(),
            PlayerField::Birthday => self.birthday.clone(),
            PlayerField::Banned => self.banned.to_string(),
        }
    }

    /// Draft for the create endpoint.
    ///
    /// Level uses leading-integer parsing (`"12abc"` is 12, `"abc"` is
    /// nothing).
    pub fn to_create_draft(&self) -> PlayerDraft {
        self.draft(parse_leading_integer(&self.level))
    }

    /// Draft for the update endpoint.
    ///
    /// Level must read as a number as a whole before its integer part is
    /// taken; blank or non-numeric text yields nothing.
    pub fn to_update_draft(&self) -> PlayerDraft {
        self.draft(coerce_numeric_level(&self.level))
    }

    fn draft(&self, level: Option<i32>) -> PlayerDraft {
        PlayerDraft {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            level,
            birthday: Birthday::from_iso_date(&self.birthday),
            banned: self.banned,
        }
    }
}

fn clip_chars(raw: &str, max: usize) -> String {
    raw.chars().take(max).collect()
}

fn parse_flag(raw: &str) -> Result<bool, FormError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => Err(FormError::Banned {
            input: raw.to_owned(),
        }),
    }
}

/// Parse the leading integer of `raw`, skipping leading whitespace.
///
/// Trailing garbage is ignored; no digits (or overflow) yields `None`.
pub fn parse_leading_integer(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Coerce a number widget's text: blank or non-numeric text is `None`.
pub fn coerce_numeric_level(raw: &str) -> Option<i32> {
    raw.trim().parse::<f64>().ok()?;
    parse_leading_integer(raw)
}
