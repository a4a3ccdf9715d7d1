//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, clocks,
//! downloads) and pure math from page and component logic to improve reuse
//! and testability.

pub mod chart_math;
pub mod download;
pub mod lifecycle;
pub mod simulation;
pub mod time;
pub mod timer;
