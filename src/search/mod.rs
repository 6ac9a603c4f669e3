/// Similarity search transport
///
/// This module handles:
/// - Uploading the selected image as a multipart request (client.rs)
/// - Decoding the ranked match list (response.rs)
/// - Downloading result images for the grid

pub mod client;
pub mod response;

pub use client::SearchClient;
