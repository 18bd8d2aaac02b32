//! Title validation.
//!
//! # Design
//! Validation failures are values, not exceptions: `normalize_title` returns
//! a tagged error union so both the service and the API layer can propagate
//! it with `?`. Trimming removes leading and trailing whitespace only —
//! internal whitespace is part of the title.

use thiserror::Error;

/// Maximum accepted title length, in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 500;

/// Why a raw title was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTitle {
    /// The request carried no title at all.
    #[error("title is required")]
    Missing,

    /// The title was empty or whitespace-only after trimming.
    #[error("title must not be empty")]
    Empty,

    /// The trimmed title exceeded [`MAX_TITLE_LEN`] characters.
    #[error("title must not exceed {MAX_TITLE_LEN} characters")]
    TooLong,
}

/// Trim a raw title and check its constraints.
///
/// Returns the trimmed title on success. Length is counted in characters,
/// not bytes, so a 500-character multi-byte title is accepted.
pub fn normalize_title(raw: Option<&str>) -> Result<String, InvalidTitle> {
    let raw = raw.ok_or(InvalidTitle::Missing)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidTitle::Empty);
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(InvalidTitle::TooLong);
    }
    Ok(trimmed.to_string())
}
