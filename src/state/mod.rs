/// State management module
///
/// This module handles all application state, including:
/// - The gallery view-state and lightbox navigation (gallery.rs)
/// - Shared data structures (data.rs)
/// - The SQLite catalog of uploaded images (catalog.rs)
pub mod catalog;
pub mod data;
pub mod gallery;
