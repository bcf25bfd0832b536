//! Taskdeck - A sidebar-navigated terminal workspace
//!
//! This library provides a terminal interface built with Ratatui: a
//! collapsible sidebar, a static route table, a task list with a modal
//! editor, and a process-wide keyboard shortcut dispatcher. Tasks live in
//! memory for the lifetime of a page.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - Task model and the in-memory collection
//! * [`router`] - Path to page resolution
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Task model and the in-memory task collection
pub mod entities;

/// Sample tasks shown on the task pages
pub mod fixtures;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Static route table and path normalization
pub mod router;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use entities::task;
