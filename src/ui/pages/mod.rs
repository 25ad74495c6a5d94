//! Application pages
//!
//! - Auth page (sign in / sign up)
//! - Dashboard (post sign-in landing page)
//! - Not found

mod auth;
mod dashboard;
mod header;
mod not_found;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
