//! Browser-independent logic for the auth form and theme toggle

pub mod auth;
pub mod config;
pub mod theme;
