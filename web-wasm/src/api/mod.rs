//! Outbound HTTP calls

pub mod contact;
