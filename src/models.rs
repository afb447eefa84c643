//! Domain models that mirror the SQLite schema and flow between the store, the
//! session handlers and the terminal front-end. They stay plain data holders so
//! persistence and presentation can each focus on their own job.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{ToSql, ToSqlOutput};

use crate::error::ParseSpecialtyError;

/// Placeholder portrait stored whenever a doctor is saved without an image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://th.bing.com/th/id/OIP.1NS2gzdox57ZsKIz1URtGwHaIe?rs=1&pid=ImgDetMain";

/// Lower bound of the rating slider.
pub const MIN_RATING: f64 = 1.0;
/// Upper bound of the rating slider.
pub const MAX_RATING: f64 = 5.0;
/// Slider increment.
pub const RATING_STEP: f64 = 0.1;
/// Value the add form starts with.
pub const DEFAULT_RATING: f64 = 4.5;

/// A registered account. The `password` column only ever holds a bcrypt hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Medical specialties a doctor can be filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Specialty {
    #[default]
    Dentistry,
    Surgery,
    Physiotherapy,
    InternalMedicine,
}

impl Specialty {
    /// Every specialty in the order the form cycles through them.
    pub const ALL: [Specialty; 4] = [
        Specialty::Dentistry,
        Specialty::Surgery,
        Specialty::Physiotherapy,
        Specialty::InternalMedicine,
    ];

    /// Text stored in the `specialty` column and shown in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Dentistry => "Dentistry",
            Specialty::Surgery => "Surgery",
            Specialty::Physiotherapy => "Physiotherapy",
            Specialty::InternalMedicine => "Internal Medicine",
        }
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| candidate == self)
            .unwrap_or(0)
    }

    /// The specialty after this one, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The specialty before this one, wrapping around.
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = ParseSpecialtyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|specialty| specialty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSpecialtyError(s.to_string()))
    }
}

impl ToSql for Specialty {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

/// A doctor listed in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    /// Primary key. Booking and editing are keyed by this, never by name.
    pub id: i64,
    pub name: String,
    pub specialty: Specialty,
    /// Stored as given. Only the form slider keeps it inside
    /// [`MIN_RATING`, `MAX_RATING`].
    pub rating: f64,
    pub image_url: String,
}

impl Doctor {
    /// Case-insensitive substring match against the name or the specialty.
    /// An empty query matches everyone.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.specialty.as_str().to_lowercase().contains(&needle)
    }

    /// Rating rendered with one decimal, the slider's resolution.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Field values submitted by the add and edit forms.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorInput {
    pub name: String,
    pub specialty: Specialty,
    pub rating: f64,
    /// Blank means "use [`DEFAULT_IMAGE_URL`]".
    pub image_url: String,
}

impl DoctorInput {
    /// The URL that actually gets stored.
    pub fn resolved_image_url(&self) -> &str {
        resolve_image_url(&self.image_url)
    }
}

/// Substitute the placeholder portrait for a blank URL.
pub fn resolve_image_url(image_url: &str) -> &str {
    if image_url.is_empty() {
        DEFAULT_IMAGE_URL
    } else {
        image_url
    }
}

/// Keep a rating on the slider: clamped to the bounds and snapped to one decimal.
pub fn clamp_rating(rating: f64) -> f64 {
    let clamped = rating.clamp(MIN_RATING, MAX_RATING);
    (clamped * 10.0).round() / 10.0
}
