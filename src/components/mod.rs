//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O.

pub mod checkbox;
pub mod modal;
pub mod pagination;

pub use checkbox::{CheckState, Checkbox};
pub use modal::Modal;
pub use pagination::Pagination;
