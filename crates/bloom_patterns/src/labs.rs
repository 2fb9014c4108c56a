//! Catalogue of runnable labs.

use std::fmt;
use std::io::Write;

use tracing::info;

use bloom_core::LabConfig;

use crate::error::PatternResult;
use crate::{behavioral, creational, solid, structural};

/// One numbered lab from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lab {
    Solid,
    Creational,
    Structural,
    Behavioral,
}

impl Lab {
    /// Label used when no choice is given.
    pub const DEFAULT_CHOICE: &'static str = "1";

    pub fn all() -> &'static [Lab] {
        &[
            Lab::Solid,
            Lab::Creational,
            Lab::Structural,
            Lab::Behavioral,
        ]
    }

    /// Look up a lab by its menu label. Surrounding whitespace is ignored.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Solid),
            "2" => Some(Self::Creational),
            "3" => Some(Self::Structural),
            "4" => Some(Self::Behavioral),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solid => "1",
            Self::Creational => "2",
            Self::Structural => "3",
            Self::Behavioral => "4",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Solid => "Laboratory Work #1 – SOLID (SRP, OCP, DIP)",
            Self::Creational => "Laboratory Work #2 – Creational Patterns",
            Self::Structural => "Laboratory Work #3 – Structural Patterns",
            Self::Behavioral => "Laboratory Work #4 – Behavioral Patterns",
        }
    }

    /// Comma-separated list of every label, e.g. `1, 2, 3, 4`.
    pub fn available_labels() -> String {
        Self::all()
            .iter()
            .map(|lab| lab.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn run(&self, config: &LabConfig, out: &mut dyn Write) -> PatternResult<()> {
        info!("Running lab {}: {}", self.label(), self.title());
        match self {
            Self::Solid => solid::run(out),
            Self::Creational => creational::run(config, out),
            Self::Structural => structural::run(out),
            Self::Behavioral => behavioral::run(out),
        }
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.label(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice_round_trips_labels() {
        for lab in Lab::all() {
            assert_eq!(Lab::from_choice(lab.label()), Some(*lab));
        }
    }

    #[test]
    fn test_from_choice_unknown() {
        assert_eq!(Lab::from_choice("9"), None);
        assert_eq!(Lab::from_choice("solid"), None);
        assert_eq!(Lab::from_choice(""), None);
    }

    #[test]
    fn test_from_choice_trims() {
        assert_eq!(Lab::from_choice(" 3\n"), Some(Lab::Structural));
    }

    #[test]
    fn test_default_choice_is_solid() {
        assert_eq!(Lab::from_choice(Lab::DEFAULT_CHOICE), Some(Lab::Solid));
    }

    #[test]
    fn test_available_labels() {
        assert_eq!(Lab::available_labels(), "1, 2, 3, 4");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Lab::Solid.to_string(),
            "1) Laboratory Work #1 – SOLID (SRP, OCP, DIP)"
        );
    }
}
