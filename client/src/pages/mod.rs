//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page loads its own copy of the mock data and delegates rendering
//! details to `components`.

pub mod chat;
pub mod dashboard;
pub mod insights;
pub mod upload;
