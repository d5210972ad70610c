//! Data model for the portfolio site
//!
//! Shared between the content store and the web (WASM) frontend:
//! - Skill / Project / Certificate: the showcased records
//! - NavItem / Social: navigation and outbound links
//! - Profile: the "about me" fields

use serde::{Deserialize, Serialize};

/// Skill category used for grouping on the skills section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Design,
    Other,
}

impl SkillCategory {
    /// Display order on the skills section
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
            SkillCategory::Design => "Design",
            SkillCategory::Other => "Other Skills",
        }
    }
}

/// One skill with a 0-100 proficiency level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

/// One showcased project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub featured: bool,
}

/// One certificate on the timeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

/// In-page navigation entry; `href` is an anchor like `#projects`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

/// Outbound social link; `icon` is a key resolved by the view layer,
/// unknown keys fall back to a text label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
    pub icon: String,
}

/// "About me" profile fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub profile_image: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub availability: String,
}

impl Profile {
    /// Bio paragraphs, split on blank lines
    pub fn bio_paragraphs(&self) -> Vec<&str> {
        self.bio
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// `tel:` URI for the phone number: digits only, but a leading `+`
    /// (country-code marker) survives
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        if self.phone.trim_start().starts_with('+') {
            format!("tel:+{digits}")
        } else {
            format!("tel:{digits}")
        }
    }
}
