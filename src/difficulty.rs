//! Difficulty tiers and completion progress
//!
//! Each tier sets the opponent's tracking speed. Beating a tier marks it
//! completed; completion flags are never cleared.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opponent speed tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Multiplier applied to the opponent's base speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.75,
            Difficulty::Hard => 2.5,
        }
    }
}

/// Name that matches no difficulty tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty '{}'", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// Which tiers the player has beaten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub easy: bool,
    pub medium: bool,
    pub hard: bool,
}

impl Progress {
    pub fn is_completed(&self, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Mark `difficulty` completed. Returns true if this changed anything.
    pub fn mark_completed(&mut self, difficulty: Difficulty) -> bool {
        let flag = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };
        let changed = !*flag;
        *flag = true;
        changed
    }

    pub fn completed_count(&self) -> usize {
        Difficulty::ALL.iter().filter(|d| self.is_completed(**d)).count()
    }

    /// Parse stored progress, treating anything that is not `true` as false
    ///
    /// Missing keys, wrong types and unparseable JSON never fail; they just
    /// read as "not completed".
    pub fn from_json_lenient(json: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(json) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Ignoring malformed progress data: {}", e);
                return Self::default();
            }
        };
        let flag = |key: &str| value.get(key).and_then(|v| v.as_bool()).unwrap_or(false);
        Self {
            easy: flag("easy"),
            medium: flag("medium"),
            hard: flag("hard"),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "easy": self.easy,
            "medium": self.medium,
            "hard": self.hard,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_multipliers() {
        assert_eq!(Difficulty::Easy.speed_multiplier(), 1.0);
        assert_eq!(Difficulty::Medium.speed_multiplier(), 1.75);
        assert_eq!(Difficulty::Hard.speed_multiplier(), 2.5);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("med".parse::<Difficulty>(), Ok(Difficulty::Medium));
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.to_string(), "unknown difficulty 'nightmare'");
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_mark_completed_only_sets() {
        let mut progress = Progress::default();
        assert!(progress.mark_completed(Difficulty::Medium));
        assert!(!progress.mark_completed(Difficulty::Medium));
        assert!(progress.is_completed(Difficulty::Medium));
        assert!(!progress.is_completed(Difficulty::Easy));
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn test_lenient_parse_partial_entries() {
        let progress = Progress::from_json_lenient(r#"{"easy": true, "medium": "yes", "hard": 1}"#);
        assert_eq!(
            progress,
            Progress {
                easy: true,
                medium: false,
                hard: false
            }
        );
    }

    #[test]
    fn test_lenient_parse_garbage() {
        assert_eq!(Progress::from_json_lenient("not json"), Progress::default());
        assert_eq!(Progress::from_json_lenient("[true, true]"), Progress::default());
        assert_eq!(Progress::from_json_lenient("{}"), Progress::default());
    }

    #[test]
    fn test_json_keys_match_storage_format() {
        let progress = Progress {
            easy: true,
            medium: false,
            hard: true,
        };
        let parsed = Progress::from_json_lenient(&progress.to_json());
        assert_eq!(parsed, progress);
        assert!(progress.to_json().contains("\"hard\":true"));
    }
}
