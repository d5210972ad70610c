//! Portfolio Common Library
//!
//! Platform-agnostic core shared by the web (WASM) frontend: data model,
//! static content, theme logic, project filtering, contact-form validation
//! and the viewport-reveal state machine.

pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod reveal;
pub mod schedule;
pub mod theme;
pub mod types;

pub use contact::{validate, ContactFields, FormField, SubmitPhase, SUBMITTED_RESET_MS};
pub use content::ContentStore;
pub use error::{Error, Result};
pub use filter::ProjectFilterIndex;
pub use reveal::{RevealController, RevealState, Stagger};
pub use schedule::{FakeScheduler, TimerScheduler};
pub use theme::{initial_theme, MemoryStore, PreferenceStore, Theme, THEME_STORAGE_KEY};
pub use types::{Certificate, NavItem, Profile, Project, Skill, SkillCategory, Social};
