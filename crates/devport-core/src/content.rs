//! Static portfolio content.
//!
//! Everything the page shows comes from one JSON document embedded in the
//! frontend at build time. The navigation entries double as the tracker's
//! section order.

use crate::section::SectionId;
use crate::tracker::{ScrollTracker, TrackerConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid portfolio JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("portfolio declares no navigation sections")]
    NoSections,
    #[error("navigation entry #{index} has an empty section id")]
    EmptySectionId { index: usize },
    #[error("section '{0}' is declared more than once")]
    DuplicateSection(SectionId),
    #[error("tracker.{field} must be a finite non-negative number, got {value}")]
    InvalidTrackerValue { field: &'static str, value: f64 },
    #[error("navigation declares sections {declared:?} but the page renders {rendered:?}")]
    SectionMismatch {
        declared: Vec<SectionId>,
        rendered: Vec<SectionId>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Text of the logo in the navigation bar.
    pub brand: String,
    pub profile: Profile,
    pub navigation: Vec<NavEntry>,
    #[serde(default, rename = "tracker")]
    pub tracker_config: TrackerConfig,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub more_projects: Option<LinkedText>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: SectionId,
    pub label: String,
    /// Heading of the section itself; the nav label is used when absent.
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedText {
    pub label: String,
    pub url: String,
}

/// Call-to-action button in the hero, scrolling to another section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroAction {
    pub label: String,
    pub target: SectionId,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub headline: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub resume: Option<LinkedText>,
    #[serde(default)]
    pub actions: Vec<HeroAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: Icon,
    /// CSS color of the badge accent, e.g. `"#3b82f6"`.
    pub color: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Top,
    Middle,
    Low,
    #[serde(other)]
    Unknown,
}

/// How strongly a level badge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Normal,
    Faint,
    Muted,
}

impl SkillLevel {
    /// Fill of the level gauge, in percent.
    pub fn gauge_percent(self) -> u8 {
        match self {
            Self::Top => 100,
            Self::Middle => 60,
            Self::Low => 30,
            Self::Unknown => 0,
        }
    }

    pub fn emphasis(self) -> Emphasis {
        match self {
            Self::Top => Emphasis::Strong,
            Self::Middle => Emphasis::Normal,
            Self::Low => Emphasis::Faint,
            Self::Unknown => Emphasis::Muted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Middle => "Middle",
            Self::Low => "Low",
            Self::Unknown => "?",
        }
    }
}

/// Pictogram shown next to skills and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Code,
    Layout,
    Box,
    Globe,
    Smartphone,
    Server,
    Database,
    Terminal,
    Cpu,
    Layers,
    Document,
    #[default]
    #[serde(other)]
    Generic,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Layout => "▦",
            Self::Box => "▣",
            Self::Globe => "◍",
            Self::Smartphone => "▯",
            Self::Server => "☰",
            Self::Database => "⛁",
            Self::Terminal => ">_",
            Self::Cpu => "⌗",
            Self::Layers => "≋",
            Self::Document => "▤",
            Self::Generic => "•",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub message: String,
    pub email: String,
    pub email_label: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    Github,
    Linkedin,
    Instagram,
    #[serde(other)]
    Website,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Website => "Website",
        }
    }
}

impl Portfolio {
    /// Parses and validates a portfolio document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.navigation.is_empty() {
            return Err(ContentError::NoSections);
        }
        let mut seen = BTreeSet::new();
        for (index, entry) in self.navigation.iter().enumerate() {
            if entry.id.is_blank() {
                return Err(ContentError::EmptySectionId { index });
            }
            if !seen.insert(&entry.id) {
                return Err(ContentError::DuplicateSection(entry.id.clone()));
            }
        }
        for (field, value) in [
            ("lookahead", self.tracker_config.lookahead),
            ("bottom_tolerance", self.tracker_config.bottom_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ContentError::InvalidTrackerValue { field, value });
            }
        }
        Ok(())
    }

    /// Checks that the navigation declares exactly the `rendered` sections,
    /// in the same document order.
    pub fn ensure_sections(&self, rendered: &[SectionId]) -> Result<(), ContentError> {
        if self.section_ids().eq(rendered) {
            return Ok(());
        }
        Err(ContentError::SectionMismatch {
            declared: self.section_ids().cloned().collect(),
            rendered: rendered.to_vec(),
        })
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &SectionId> {
        self.navigation.iter().map(|entry| &entry.id)
    }

    pub fn first_section(&self) -> Option<&SectionId> {
        self.section_ids().next()
    }

    /// Position of the section in the navigation and its heading.
    pub fn section_title(&self, id: &SectionId) -> Option<(usize, &str)> {
        self.navigation
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.id == *id)
            .map(|(index, entry)| (index, entry.title.as_deref().unwrap_or(&entry.label)))
    }

    /// Tracker over the navigation sections, in declared order.
    pub fn tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.section_ids().cloned(), self.tracker_config)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}
