//! UI module for taskdeck
//!
//! This module handles the navigation shell, the routed pages, and every
//! component they are drawn with.

pub mod app_component;
pub mod components;
pub mod core;
pub mod forms;
pub mod layout;
pub mod pages;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
