use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identity of an item, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: String) -> Self {
        Item {
            id,
            text,
            completed: false,
        }
    }

    /// Checkbox marker used by the text renderers
    pub fn marker(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Which items the visible projection lets through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn matches(self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !item.completed,
            FilterMode::Completed => item.completed,
        }
    }

    /// Cycle All -> Active -> Completed -> All
    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }

    /// Capitalized label for the filter tabs
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}' (expected all, active or completed)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(completed: bool) -> Item {
        Item {
            id: ItemId(0),
            text: "x".into(),
            completed,
        }
    }

    #[test]
    fn filter_matches() {
        assert!(FilterMode::All.matches(&item(true)));
        assert!(FilterMode::All.matches(&item(false)));
        assert!(FilterMode::Active.matches(&item(false)));
        assert!(!FilterMode::Active.matches(&item(true)));
        assert!(FilterMode::Completed.matches(&item(true)));
        assert!(!FilterMode::Completed.matches(&item(false)));
    }

    #[test]
    fn filter_cycle_visits_every_mode() {
        let mut mode = FilterMode::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(seen, FilterMode::ALL.to_vec());
        assert_eq!(mode, FilterMode::All);
    }

    #[test]
    fn filter_parse() {
        assert_eq!("active".parse::<FilterMode>(), Ok(FilterMode::Active));
        assert_eq!(" Completed ".parse::<FilterMode>(), Ok(FilterMode::Completed));
        assert_eq!("ALL".parse::<FilterMode>(), Ok(FilterMode::All));
        assert!("done".parse::<FilterMode>().is_err());
    }

    #[test]
    fn filter_serde_lowercase() {
        let json = serde_json::to_string(&FilterMode::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let back: FilterMode = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(back, FilterMode::Active);
    }

    #[test]
    fn marker_reflects_completion() {
        assert_eq!(item(true).marker(), "[x]");
        assert_eq!(item(false).marker(), "[ ]");
    }
}
