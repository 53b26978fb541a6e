//! Drive Letter Type
//!
//! Validated drive-letter identifier for mapping records. Validation
//! happens at this boundary so the store layer only ever sees letters in
//! range.

use crate::error::{LtfsConfigError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// First letter available for tape mappings; `A` and `B` stay reserved
/// for legacy floppy devices.
pub const MIN_DRIVE_LETTER: char = 'C';

/// Last letter available for tape mappings.
pub const MAX_DRIVE_LETTER: char = 'Z';

/// A drive letter within `MIN_DRIVE_LETTER..=MAX_DRIVE_LETTER`.
///
/// Lowercase input is folded to uppercase, matching the case-insensitive
/// store underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DriveLetter(char);

impl DriveLetter {
    /// Mount point letter the mounting service conventionally expects in
    /// generated command lines.
    pub const DEFAULT_MOUNT_TARGET: DriveLetter = DriveLetter('T');

    pub fn new(letter: char) -> Result<Self> {
        let upper = letter.to_ascii_uppercase();
        if (MIN_DRIVE_LETTER..=MAX_DRIVE_LETTER).contains(&upper) {
            Ok(Self(upper))
        } else {
            Err(LtfsConfigError::invalid_drive_letter(format!(
                "'{}' is outside {}..={}",
                letter, MIN_DRIVE_LETTER, MAX_DRIVE_LETTER
            )))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Every letter a mapping may occupy, in order.
    pub fn all() -> impl Iterator<Item = DriveLetter> {
        (MIN_DRIVE_LETTER..=MAX_DRIVE_LETTER).map(DriveLetter)
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for DriveLetter {
    type Error = LtfsConfigError;

    fn try_from(letter: char) -> Result<Self> {
        Self::new(letter)
    }
}

impl FromStr for DriveLetter {
    type Err = LtfsConfigError;

    /// Accepts `"E"` and the colon form `"E:"`.
    fn from_str(s: &str) -> Result<Self> {
        let bare = s.strip_suffix(':').unwrap_or(s);
        let mut chars = bare.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(LtfsConfigError::invalid_drive_letter(format!(
                "'{}' is not a single drive letter",
                s
            ))),
        }
    }
}
