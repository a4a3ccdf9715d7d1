//! Data access modules standing in for a meeting-analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON schema a backend would return, `mock` loads the
//! embedded fixtures in that schema, and `assistant` is the seam where a real
//! chat backend would plug in.

pub mod assistant;
pub mod mock;
pub mod types;
