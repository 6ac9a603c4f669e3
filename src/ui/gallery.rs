use iced::widget::image::Handle;

/// Download state of one result image
#[derive(Debug, Clone)]
pub enum Tile {
    Loading,
    Loaded(Handle),
    /// Fetch failed; the grid shows a placeholder
    Missing,
}

/// Result images for the current result list
///
/// Each new result list starts a new batch. Downloads report back with the
/// batch they were started for, so images from an older search never land in
/// the current grid.
#[derive(Debug, Default)]
pub struct Gallery {
    batch: u64,
    tiles: Vec<Tile>,
}

impl Gallery {
    /// Start a batch of `count` loading tiles and return its id
    pub fn begin(&mut self, count: usize) -> u64 {
        self.batch += 1;
        self.tiles = vec![Tile::Loading; count];
        self.batch
    }

    pub fn clear(&mut self) {
        self.batch += 1;
        self.tiles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Record a finished download. Returns false when it was stale.
    pub fn resolve(&mut self, batch: u64, index: usize, image: Option<Handle>) -> bool {
        if batch != self.batch {
            return false;
        }
        match self.tiles.get_mut(index) {
            Some(tile) => {
                *tile = image.map_or(Tile::Missing, Tile::Loaded);
                true
            }
            None => false,
        }
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }
}
