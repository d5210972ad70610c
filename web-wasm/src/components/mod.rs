//! View components, one per page section

pub mod about;
pub mod certificates;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod projects;
pub mod skills;
