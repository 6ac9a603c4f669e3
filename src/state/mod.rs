/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The upload-and-search workflow controller (workflow.rs)

pub mod data;
pub mod workflow;
