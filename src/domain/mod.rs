//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod member;
pub mod view;

pub use member::{Member, MemberField, MemberId};
pub use view::{MemberPage, page_count, view};
