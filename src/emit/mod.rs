//! # Emit Module
//!
//! Output rendering for converted sprites:
//!
//! - [`header`]: packed bitmap → guarded C header source
//! - [`preview`]: binary buffer → two-tone PNG preview

pub mod header;
pub mod preview;

pub use header::{EmitRecord, render_header, sanitize_symbol};
pub use preview::save_preview;
