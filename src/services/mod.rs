//! Service Layer
//!
//! Abstraction over the remote member collection and the async runtime it
//! needs.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  MemberSource (trait, injected)              │
//! │    └── HttpMemberSource (reqwest, tokio)     │
//! └──────────────────────────────────────────────┘
//!                      │ run_in_tokio
//!                      ▼ Result<Vec<Member>>
//! ┌──────────────────────────────────────────────┐
//! │  State Layer (MembersState::finish_load)     │
//! └──────────────────────────────────────────────┘
//! ```

mod runtime;
mod source;

pub use runtime::*;
pub use source::*;
