//! Application Layer
//!
//! Contains app initialization, window management and the workspace shell.

pub mod application;
pub mod workspace;
