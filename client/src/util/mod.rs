//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting lives here so components stay declarative and the rules stay
//! testable without a browser.

pub mod format;
