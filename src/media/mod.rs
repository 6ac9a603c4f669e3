/// Local image handling module
///
/// This module handles:
/// - Reading picked and dropped files (loader.rs)
/// - Deriving previews for the drop zone (preview.rs)

pub mod loader;
pub mod preview;
