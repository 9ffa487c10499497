//! Value types for the license and copyright findings a scanner reports for a
//! source tree, and the [`FindingsMatcher`] which associates them.

pub mod cfg;
mod file_matcher;
mod matcher;

pub use file_matcher::{LicenseFileMatcher, DEFAULT_LICENSE_FILE_PATTERNS};
pub use matcher::{FindingsMatcher, MatchedPackage, DEFAULT_TOLERANCE_LINES};

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// The line number used when the position of a finding within a file is not
/// known
pub const UNKNOWN_LINE: u32 = 0;

/// A text location violates the [`TextLocation`] invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidLocation {
    EmptyPath,
    StartAfterEnd { start_line: u32, end_line: u32 },
    /// Only one of the lines is [`UNKNOWN_LINE`]
    PartiallyUnknown { start_line: u32, end_line: u32 },
}

impl fmt::Display for InvalidLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => f.write_str("the path of a text location cannot be empty"),
            Self::StartAfterEnd {
                start_line,
                end_line,
            } => write!(
                f,
                "start line {start_line} is after end line {end_line}"
            ),
            Self::PartiallyUnknown {
                start_line,
                end_line,
            } => write!(
                f,
                "lines {start_line}..{end_line} must either both be known or both be unknown"
            ),
        }
    }
}

impl std::error::Error for InvalidLocation {}

#[derive(Deserialize)]
struct RawLocation {
    path: String,
    start_line: u32,
    end_line: u32,
}

impl TryFrom<RawLocation> for TextLocation {
    type Error = InvalidLocation;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::new(raw.path, raw.start_line, raw.end_line)
    }
}

/// A range of lines within a file. Either `1 <= start_line <= end_line`, or
/// both lines are [`UNKNOWN_LINE`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct TextLocation {
    path: String,
    start_line: u32,
    end_line: u32,
}

impl TextLocation {
    pub fn new(
        path: impl Into<String>,
        start_line: u32,
        end_line: u32,
    ) -> Result<Self, InvalidLocation> {
        let path = path.into();
        if path.is_empty() {
            return Err(InvalidLocation::EmptyPath);
        }

        if (start_line == UNKNOWN_LINE) != (end_line == UNKNOWN_LINE) {
            return Err(InvalidLocation::PartiallyUnknown {
                start_line,
                end_line,
            });
        }

        if start_line > end_line {
            return Err(InvalidLocation::StartAfterEnd {
                start_line,
                end_line,
            });
        }

        Ok(Self {
            path,
            start_line,
            end_line,
        })
    }

    /// A location on a single line
    #[inline]
    pub fn line(path: impl Into<String>, line: u32) -> Result<Self, InvalidLocation> {
        Self::new(path, line, line)
    }

    /// A location somewhere in the file
    #[inline]
    pub fn unknown(path: impl Into<String>) -> Result<Self, InvalidLocation> {
        Self::new(path, UNKNOWN_LINE, UNKNOWN_LINE)
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    #[inline]
    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    #[inline]
    pub fn has_known_lines(&self) -> bool {
        self.start_line != UNKNOWN_LINE
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_known_lines() {
            f.write_str(&self.path)
        } else if self.start_line == self.end_line {
            write!(f, "{}:{}", self.path, self.start_line)
        } else {
            write!(f, "{}:{}-{}", self.path, self.start_line, self.end_line)
        }
    }
}

/// A license detected by a scanner, the license is kept exactly as reported
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LicenseFinding {
    pub license: String,
    pub location: TextLocation,
}

impl LicenseFinding {
    #[inline]
    pub fn new(license: impl Into<String>, location: TextLocation) -> Self {
        Self {
            license: license.into(),
            location,
        }
    }
}

/// A copyright statement detected by a scanner
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CopyrightFinding {
    pub statement: String,
    pub location: TextLocation,
}

impl CopyrightFinding {
    #[inline]
    pub fn new(statement: impl Into<String>, location: TextLocation) -> Self {
        Self {
            statement: statement.into(),
            location,
        }
    }
}

/// A copyright statement along with every location it was found at
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CopyrightFindings {
    pub statement: String,
    pub locations: BTreeSet<TextLocation>,
}

impl CopyrightFindings {
    /// Groups raw copyright findings by their statement text
    pub fn group<I>(findings: I) -> BTreeSet<CopyrightFindings>
    where
        I: IntoIterator<Item = CopyrightFinding>,
    {
        let mut grouped = std::collections::BTreeMap::<String, BTreeSet<TextLocation>>::new();

        for finding in findings {
            grouped
                .entry(finding.statement)
                .or_default()
                .insert(finding.location);
        }

        grouped
            .into_iter()
            .map(|(statement, locations)| Self {
                statement,
                locations,
            })
            .collect()
    }
}

/// A license with every location it was found at, and the copyrights that
/// were associated with it
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LicenseFindings {
    pub license: String,
    pub locations: BTreeSet<TextLocation>,
    pub copyrights: BTreeSet<CopyrightFindings>,
}

/// The raw findings for a single package, as consumed by
/// [`FindingsMatcher::match_packages`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFindings {
    pub id: String,
    #[serde(default)]
    pub licenses: Vec<LicenseFinding>,
    #[serde(default)]
    pub copyrights: Vec<CopyrightFinding>,
}
