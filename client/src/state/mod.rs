//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each interactive component owns one small model (`upload`, `chat`,
//! `actions`) held in a local signal; `ui` carries the few chrome concerns
//! shared through context. Models are plain structs with explicit transition
//! methods so they can be tested without a browser.

pub mod actions;
pub mod chat;
pub mod ui;
pub mod upload;
