//! Members Feature
//!
//! Searchable, paginated members table with selection, inline delete and
//! an edit dialog.

pub mod controller;
pub mod edit_dialog;
pub mod page;
mod table;

pub use controller::MembersController;
pub use page::MembersPage;
