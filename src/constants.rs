//! UI Constants
//!
//! Centralized constants for layout and data loading.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Members table layout
pub const TABLE_ROW_HEIGHT: f32 = 40.0;
pub const TABLE_HEADER_HEIGHT: f32 = 44.0;
pub const CHECKBOX_COLUMN_WIDTH: f32 = 48.0;
pub const ACTIONS_COLUMN_WIDTH: f32 = 150.0;

/// Edit dialog width
pub const EDIT_DIALOG_WIDTH: f32 = 420.0;

/// Rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Remote member collection
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Request timeout for the member fetch
pub const FETCH_TIMEOUT_SECS: u64 = 30;
