use std::{fmt, str::FromStr};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Substring match, case-insensitive for ASCII.
    Title,
    /// Exact match.
    Genre,
}

impl FilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Title => "title",
            FilterKind::Genre => "genre",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FilterKind::Title),
            "genre" => Ok(FilterKind::Genre),
            other => Err(AppError::InvalidFilterKind(other.to_string())),
        }
    }
}

/// A parsed `/list/<filter>+<name>` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    pub kind: FilterKind,
    pub value: String,
}

impl CatalogFilter {
    /// Splits on the first `+`; everything after it is the value.
    pub fn parse(segment: &str) -> Result<Self, AppError> {
        let (kind, value) = segment
            .split_once('+')
            .ok_or_else(|| AppError::InvalidFilterKind(segment.to_string()))?;
        Ok(Self {
            kind: kind.parse()?,
            value: value.to_string(),
        })
    }
}
