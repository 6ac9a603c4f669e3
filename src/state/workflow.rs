/// Upload-and-search workflow controller
///
/// All session state lives in one `Workflow` value and changes only through
/// `Workflow::apply`. Each call returns an `Effect` describing the async work
/// the caller has to start (preview derivation or a search request); the
/// outcome of that work comes back later as another `Event`.
///
/// Two asynchronous results can race with user input:
/// - previews are tagged with the `Generation` that requested them and are
///   dropped when the selection has moved on (last file wins)
/// - searches are serialized: `SearchRequested` is ignored while one is
///   in flight

use super::data::{Notice, PreviewImage, SearchResult, SelectedFile};

/// Tag bumped on every selection change (choose, drop, reset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Events accepted by the controller
#[derive(Debug, Clone)]
pub enum Event {
    /// User picked a file
    FileChosen(SelectedFile),
    /// Preview derivation finished for the given selection
    PreviewReady {
        generation: Generation,
        preview: PreviewImage,
    },
    /// Preview derivation failed for the given selection
    PreviewFailed {
        generation: Generation,
        reason: String,
    },
    /// Something is being dragged over the drop surface
    DragEnter,
    /// The drag left the drop surface
    DragLeave,
    /// The drag was released on the drop surface
    Drop,
    /// Files read from a drop; only the first one is used
    Dropped(Vec<SelectedFile>),
    /// User pressed the search button
    SearchRequested,
    /// The service answered with an ordered list of matches
    SearchSucceeded(Vec<SearchResult>),
    /// Network, status or decode failure
    SearchFailed(String),
    /// User removed the selected file
    Reset,
}

/// Work the caller must start after applying an event
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Derive a preview for `file` and report back with `generation`
    DerivePreview {
        generation: Generation,
        file: SelectedFile,
    },
    /// Upload `file` to the search service
    Search(SelectedFile),
}

/// Coarse mode of the workflow, derived from the stored state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    PreviewPending,
    ReadyToSearch,
    Searching,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
enum Selection {
    Empty,
    PreviewPending(SelectedFile),
    Ready {
        file: SelectedFile,
        preview: PreviewImage,
    },
}

impl Selection {
    fn file(&self) -> Option<&SelectedFile> {
        match self {
            Selection::Empty => None,
            Selection::PreviewPending(file) | Selection::Ready { file, .. } => Some(file),
        }
    }
}

#[derive(Debug, Clone)]
enum SearchPhase {
    Idle,
    Searching,
    /// Always non-empty
    Matches(Vec<SearchResult>),
    Finished(Notice),
}

/// Session state of the upload-and-search workflow
#[derive(Debug, Clone)]
pub struct Workflow {
    selection: Selection,
    search: SearchPhase,
    drag_active: bool,
    generation: Generation,
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            selection: Selection::Empty,
            search: SearchPhase::Idle,
            drag_active: false,
            generation: Generation(0),
        }
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the work it triggers
    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::FileChosen(file) => self.select(file),
            Event::PreviewReady {
                generation,
                preview,
            } => {
                if generation != self.generation {
                    log::debug!("Discarding stale preview ({:?}, current {:?})", generation, self.generation);
                    return Effect::None;
                }
                if let Some(file) = self.selection.file().cloned() {
                    self.selection = Selection::Ready { file, preview };
                }
                Effect::None
            }
            Event::PreviewFailed { generation, reason } => {
                if generation == self.generation {
                    log::warn!("⚠️  Preview unavailable: {}", reason);
                }
                Effect::None
            }
            Event::DragEnter => {
                self.drag_active = true;
                Effect::None
            }
            Event::DragLeave | Event::Drop => {
                self.drag_active = false;
                Effect::None
            }
            Event::Dropped(files) => {
                self.drag_active = false;
                let count = files.len();
                match files.into_iter().next() {
                    Some(file) => {
                        if count > 1 {
                            log::info!("Dropped {} files, using {}", count, file.name);
                        }
                        self.select(file)
                    }
                    None => Effect::None,
                }
            }
            Event::SearchRequested => {
                if self.is_loading() {
                    log::debug!("Search already in flight, ignoring request");
                    return Effect::None;
                }
                let Some(file) = self.selection.file().cloned() else {
                    return Effect::None;
                };
                self.search = SearchPhase::Searching;
                log::info!("🔍 Searching for images similar to {}", file.name);
                Effect::Search(file)
            }
            Event::SearchSucceeded(matches) => {
                if !self.is_loading() {
                    log::warn!("Ignoring search response with no request in flight");
                    return Effect::None;
                }
                log::info!("✅ Search returned {} matches", matches.len());
                self.search = if matches.is_empty() {
                    SearchPhase::Finished(Notice::NoMatches)
                } else {
                    SearchPhase::Matches(matches)
                };
                Effect::None
            }
            Event::SearchFailed(reason) => {
                if !self.is_loading() {
                    log::warn!("Ignoring search failure with no request in flight");
                    return Effect::None;
                }
                log::warn!("❌ Search failed: {}", reason);
                self.search = SearchPhase::Finished(Notice::TransportFailure);
                Effect::None
            }
            Event::Reset => {
                self.generation = self.next_generation();
                self.selection = Selection::Empty;
                Effect::None
            }
        }
    }

    fn next_generation(&self) -> Generation {
        Generation(self.generation.0 + 1)
    }

    /// Shared by FileChosen and Dropped
    fn select(&mut self, file: SelectedFile) -> Effect {
        self.generation = self.next_generation();
        self.selection = Selection::PreviewPending(file.clone());
        // Results and notices go away, a pending request stays pending
        if !self.is_loading() {
            self.search = SearchPhase::Idle;
        }
        Effect::DerivePreview {
            generation: self.generation,
            file,
        }
    }

    pub fn mode(&self) -> Mode {
        match (&self.search, &self.selection) {
            (SearchPhase::Searching, _) => Mode::Searching,
            (SearchPhase::Matches(_), _) | (SearchPhase::Finished(Notice::NoMatches), _) => Mode::Succeeded,
            (SearchPhase::Finished(Notice::TransportFailure), _) => Mode::Failed,
            (SearchPhase::Idle, Selection::Empty) => Mode::Idle,
            (SearchPhase::Idle, Selection::PreviewPending(_)) => Mode::PreviewPending,
            (SearchPhase::Idle, Selection::Ready { .. }) => Mode::ReadyToSearch,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selection.file()
    }

    pub fn preview_image(&self) -> Option<&PreviewImage> {
        match &self.selection {
            Selection::Ready { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Ranked matches of the last successful request, in service order
    pub fn results(&self) -> &[SearchResult] {
        match &self.search {
            SearchPhase::Matches(matches) => matches,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.search, SearchPhase::Searching)
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.search {
            SearchPhase::Finished(notice) => Some(notice),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.notice().map(|notice| notice.message())
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True when the search button should accept a press
    pub fn can_search(&self) -> bool {
        self.selection.file().is_some() && !self.is_loading()
    }
}
