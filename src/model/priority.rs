//! Task priority levels.

use serde::{Deserialize, Deserializer, Serialize};

/// Priority of a task.
///
/// Only equality matters: filtering compares priorities, nothing orders them.
/// Decoding is lenient: any unrecognised name reads as `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a priority name, falling back to `Medium` for anything unknown.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&name))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_display() {
        assert_eq!(format!("{}", Priority::Low), "low");
        assert_eq!(format!("{}", Priority::Medium), "medium");
        assert_eq!(format!("{}", Priority::High), "high");
    }

    #[test]
    fn test_unknown_priority_falls_back_to_medium() {
        assert_eq!(Priority::from_str_lossy("HIGH"), Priority::High);
        assert_eq!(Priority::from_str_lossy(" low "), Priority::Low);
        assert_eq!(Priority::from_str_lossy("critical"), Priority::Medium);
        assert_eq!(Priority::from_str_lossy(""), Priority::Medium);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }

    #[test]
    fn test_unknown_priority_decodes_as_medium() {
        let parsed: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
        let parsed: Priority = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Priority::High);
    }
}
