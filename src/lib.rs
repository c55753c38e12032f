//! dashtui library crate.
//!
//! This library provides the core functionality for dashtui, including:
//! - Persistent key-value storage for user preferences
//! - The starred-resource set and sidebar display options
//! - Pure projection of resources into the displayed sidebar list
//! - Analytics event emission for star interactions
//! - Terminal UI components

pub mod analytics;
pub mod app;
pub mod event_loop;
pub mod options;
pub mod projector;
pub mod resource;
pub mod starred;
pub mod storage;
pub mod toggle;
pub mod ui;
