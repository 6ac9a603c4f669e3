/// UI building blocks
///
/// - `drop_zone` - drop target, picker button and preview card
/// - `results` - search button, outcome notice and result grid
/// - `gallery` - download state of result images
/// - `score_bar` - canvas similarity bar

pub mod drop_zone;
pub mod gallery;
pub mod results;
pub mod score_bar;
