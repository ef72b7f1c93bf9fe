//! View Components
//!
//! Window chrome around the feature pages.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │                      MembersPage                             │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod title_bar;

pub use title_bar::*;
