//! Film entity, its metadata enums, and field validation.
//!
//! Validation rules mirror the catalog's business constraints: a film must
//! have a non-blank name, a description of at most 200 characters, a
//! release date no earlier than the first public film screening
//! (1895-12-28) and not in the future, and a positive duration in minutes.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

/// Maximum film description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// The earliest accepted release date: the Lumière brothers' first public
/// screening on 1895-12-28.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("valid calendar date")
}

/// A film in the catalog.
///
/// The identifier is assigned by the film store on creation and is
/// immutable afterwards. Updates replace the record wholesale under the
/// same identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    /// Duration in minutes.
    pub duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpa: Option<AgeRating>,
}

/// Payload for creating a film; the store assigns the identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFilm {
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub mpa: Option<AgeRating>,
}

impl Film {
    pub fn validate(&self) -> CoreResult<()> {
        validate_fields(
            &self.name,
            self.description.as_deref(),
            self.release_date,
            self.duration,
        )
    }
}

impl NewFilm {
    pub fn validate(&self) -> CoreResult<()> {
        validate_fields(
            &self.name,
            self.description.as_deref(),
            self.release_date,
            self.duration,
        )
    }

    /// Build the stored record once the store has assigned an identifier.
    pub fn into_film(self, id: EntityId) -> Film {
        Film {
            id,
            name: self.name,
            description: self.description,
            release_date: self.release_date,
            duration: self.duration,
            genre: self.genre,
            mpa: self.mpa,
        }
    }
}

fn validate_fields(
    name: &str,
    description: Option<&str>,
    release_date: NaiveDate,
    duration: i32,
) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "film name must not be blank".to_string(),
        ));
    }
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(CoreError::Validation(format!(
                "film description must be at most {MAX_DESCRIPTION_CHARS} characters"
            )));
        }
    }
    if release_date < earliest_release_date() {
        return Err(CoreError::Validation(
            "film release date must not be before 1895-12-28".to_string(),
        ));
    }
    if release_date > Utc::now().date_naive() {
        return Err(CoreError::Validation(
            "film release date must not be in the future".to_string(),
        ));
    }
    if duration <= 0 {
        return Err(CoreError::Validation(
            "film duration must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}

/// Film genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Comedy,
    Drama,
    Cartoon,
    Thriller,
    Documentary,
    Action,
}

impl Genre {
    pub fn name(self) -> &'static str {
        match self {
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Cartoon => "cartoon",
            Genre::Thriller => "thriller",
            Genre::Documentary => "documentary",
            Genre::Action => "action",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comedy" => Ok(Genre::Comedy),
            "drama" => Ok(Genre::Drama),
            "cartoon" => Ok(Genre::Cartoon),
            "thriller" => Ok(Genre::Thriller),
            "documentary" => Ok(Genre::Documentary),
            "action" => Ok(Genre::Action),
            other => Err(CoreError::Validation(format!("unknown genre: {other}"))),
        }
    }
}

/// MPA age rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRating {
    G,
    PG,
    #[serde(rename = "PG-13")]
    PG13,
    R,
    #[serde(rename = "NC-17")]
    NC17,
}

impl AgeRating {
    pub fn code(self) -> &'static str {
        match self {
            AgeRating::G => "G",
            AgeRating::PG => "PG",
            AgeRating::PG13 => "PG-13",
            AgeRating::R => "R",
            AgeRating::NC17 => "NC-17",
        }
    }
}

impl fmt::Display for AgeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AgeRating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(AgeRating::G),
            "PG" => Ok(AgeRating::PG),
            "PG-13" => Ok(AgeRating::PG13),
            "R" => Ok(AgeRating::R),
            "NC-17" => Ok(AgeRating::NC17),
            other => Err(CoreError::Validation(format!(
                "unknown age rating code: {other}"
            ))),
        }
    }
}
