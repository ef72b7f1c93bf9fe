//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → Controller → State Method → notify → UI Refresh (derived view recomputed)
//! ```

mod app;
mod i18n;
mod members;

pub use app::*;
pub use i18n::*;
pub use members::*;
