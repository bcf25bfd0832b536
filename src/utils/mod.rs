//! Utility modules for the taskdeck application.
//!
//! - [`datetime`] - Due date parsing and the display formats used by task rows

pub mod datetime;
