//! Generator configuration
//!
//! All settings are plain data with defaults matching the conference's
//! document classes. A YAML file may override any subset of them:
//!
//! ```yaml
//! layout:
//!   slots:
//!     default: 20
//! portrait_days:
//!   - "Monday, September 16"
//! ```
//!
//! The configuration is built once at startup and passed by reference into
//! every emitter; nothing mutates it afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::layout::{SlotLengths, TableGeometry};

/// Settings for the program grid
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub slots: SlotLengths,
    pub geometry: TableGeometry,
}

/// Output directory names relative to the output root
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputLayout {
    pub book_dir: String,
    /// Section files of the book, relative to `book_dir`
    pub book_sessions_dir: String,
    pub program_dir: String,
    /// Room plans, relative to `program_dir`
    pub rooms_dir: String,
    /// Day sheets, relative to `program_dir`
    pub days_dir: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            book_dir: "Book_of_abstracts".to_string(),
            book_sessions_dir: "Sessions".to_string(),
            program_dir: "Daily_Scientific_Program".to_string(),
            rooms_dir: "rooms".to_string(),
            days_dir: "days".to_string(),
        }
    }
}

impl OutputLayout {
    pub fn book_file(&self) -> PathBuf {
        Path::new(&self.book_dir).join("BookOfAbstracts.tex")
    }

    pub fn book_section_file(&self, name: &str) -> PathBuf {
        Path::new(&self.book_dir)
            .join(&self.book_sessions_dir)
            .join(format!("{}.tex", name))
    }

    /// Path used in `\input{..}` from the book's main file
    pub fn book_section_input(&self, name: &str) -> String {
        format!("{}/{}", self.book_sessions_dir, name)
    }

    pub fn program_file(&self) -> PathBuf {
        Path::new(&self.program_dir).join("Daily_Scientific_Program.tex")
    }

    pub fn room_file(&self, room: &str) -> PathBuf {
        Path::new(&self.program_dir)
            .join(&self.rooms_dir)
            .join(format!("{}.tex", room))
    }

    pub fn day_file(&self, day: &str) -> PathBuf {
        Path::new(&self.program_dir)
            .join(&self.days_dir)
            .join(format!("{}.tex", day))
    }
}

/// Top-level configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub layout: LayoutConfig,
    /// Show prize lecture titles and speakers instead of the placeholder
    pub reveal_prize_lectures: bool,
    pub output: OutputLayout,
    /// Days (as `Weekday, Month DD`) whose day sheets are printed A3 portrait
    pub portrait_days: Vec<String>,
    /// Paper option for day sheets
    pub landscape_paper: String,
    pub portrait_paper: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            reveal_prize_lectures: false,
            output: OutputLayout::default(),
            portrait_days: Vec::new(),
            landscape_paper: "a4paper,landscape".to_string(),
            portrait_paper: "a3paper,portrait".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_yaml::from_str(text)?;
        config.layout.slots.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Paper option for the day sheet of `day`
    pub fn paper_for_day(&self, day: &str) -> &str {
        if self.portrait_days.iter().any(|d| d == day) {
            &self.portrait_paper
        } else {
            &self.landscape_paper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.layout.slots.default, 15);
        assert_eq!(config.layout.geometry.total_width_cm, 26.0);
        assert!(!config.reveal_prize_lectures);
        assert_eq!(
            config.output.book_section_file("PML"),
            PathBuf::from("Book_of_abstracts/Sessions/PML.tex")
        );
        assert_eq!(config.output.book_section_input("A04"), "Sessions/A04");
    }

    #[test]
    fn test_partial_yaml_override() {
        let yaml = "layout:\n  slots:\n    default: 20\nportrait_days:\n  - \"Monday, September 16\"\n";
        let config = GeneratorConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config.layout.slots.default, 20);
        assert_eq!(config.layout.slots.plenary, 60);
        assert_eq!(config.layout.geometry, TableGeometry::default());
        assert_eq!(config.paper_for_day("Monday, September 16"), "a3paper,portrait");
        assert_eq!(config.paper_for_day("Tuesday, September 17"), "a4paper,landscape");
    }

    #[test]
    fn test_invalid_yaml_config() {
        assert!(matches!(
            GeneratorConfig::from_yaml_str("layout:\n  slots:\n    default: 0\n"),
            Err(ConfigError::InvalidSlots(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_yaml_str("layout: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
