//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render meeting data supplied by their page and report user
//! input back through callbacks. Interactive ones own a small model from
//! `state` in a local signal.

pub mod action_list;
pub mod chat_panel;
pub mod file_uploader;
pub mod insights_chart;
pub mod layout;
pub mod meeting_summary;
pub mod toast;
