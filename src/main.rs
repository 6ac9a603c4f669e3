use iced::event::{self, Event as IcedEvent};
use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod media;
mod search;
mod state;
mod ui;

use config::ServiceConfig;
use error::AppError;
use search::SearchClient;
use state::data::SelectedFile;
use state::workflow::{Effect, Event, Workflow};
use ui::gallery::Gallery;

/// Main application state
struct ImageSearch {
    /// Upload-and-search workflow; the only owner of session state
    workflow: Workflow,
    /// Transport to the similarity service
    client: SearchClient,
    /// Downloaded result images
    gallery: Gallery,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Browse…"
    BrowseRequested,
    /// The file picker closed (None when cancelled)
    FilePicked(Option<SelectedFile>),
    /// Event for the workflow controller
    Workflow(Event),
    /// A file was released over the window
    FileDropped(PathBuf),
    /// A result image finished downloading (None on failure)
    ResultImageLoaded {
        batch: u64,
        index: usize,
        image: Option<Handle>,
    },
}

impl ImageSearch {
    /// Create a new instance of the application
    fn new(client: SearchClient) -> (Self, Task<Message>) {
        log::info!("🎨 Image search ready, service at {}", client.endpoint());

        (
            ImageSearch {
                workflow: Workflow::new(),
                client,
                gallery: Gallery::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseRequested => Task::perform(media::loader::pick_image(), Message::FilePicked),
            Message::FilePicked(Some(file)) => self.update(Message::Workflow(Event::FileChosen(file))),
            Message::FilePicked(None) => {
                log::debug!("File picker cancelled");
                Task::none()
            }
            Message::Workflow(event) => {
                let search_finished = matches!(event, Event::SearchSucceeded(_));
                let effect = self.workflow.apply(event);
                log::debug!("Workflow mode: {:?}", self.workflow.mode());
                let mut tasks = vec![self.run(effect)];

                if self.workflow.results().is_empty() {
                    if !self.gallery.is_empty() {
                        self.gallery.clear();
                    }
                } else if search_finished {
                    tasks.push(self.load_result_images());
                }

                Task::batch(tasks)
            }
            Message::FileDropped(path) => {
                // One drop of several files arrives as several messages;
                // the first one ends the drag and is the only one read
                if !self.workflow.is_drag_active() {
                    log::debug!("Ignoring extra dropped file {}", path.display());
                    return Task::none();
                }
                self.workflow.apply(Event::Drop);

                Task::perform(media::loader::load_file(path), |loaded| {
                    let files = match loaded {
                        Ok(file) => vec![file],
                        Err(e) => {
                            log::warn!("⚠️  {}", e);
                            Vec::new()
                        }
                    };
                    Message::Workflow(Event::Dropped(files))
                })
            }
            Message::ResultImageLoaded {
                batch,
                index,
                image,
            } => {
                if !self.gallery.resolve(batch, index, image) {
                    log::debug!("Discarding result image {} from batch {}", index, batch);
                }
                Task::none()
            }
        }
    }

    /// Start the async work requested by the workflow
    fn run(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::DerivePreview { generation, file } => {
                Task::perform(media::preview::derive_preview(file), move |derived| {
                    Message::Workflow(match derived {
                        Ok(preview) => Event::PreviewReady {
                            generation,
                            preview,
                        },
                        Err(e) => Event::PreviewFailed {
                            generation,
                            reason: e.to_string(),
                        },
                    })
                })
            }
            Effect::Search(file) => {
                let client = self.client.clone();
                Task::perform(search_async(client, file), |outcome| {
                    Message::Workflow(match outcome {
                        Ok(matches) => Event::SearchSucceeded(matches),
                        Err(reason) => Event::SearchFailed(reason),
                    })
                })
            }
        }
    }

    /// Download every result image of the current result list
    fn load_result_images(&mut self) -> Task<Message> {
        let results = self.workflow.results();
        let batch = self.gallery.begin(results.len());

        let downloads = results.iter().enumerate().map(|(index, result)| {
            let client = self.client.clone();
            let identifier = result.identifier.clone();
            Task::perform(
                async move {
                    match client.fetch_image(&identifier).await {
                        Ok(bytes) => Some(Handle::from_bytes(bytes)),
                        Err(e) => {
                            log::warn!("⚠️  No image for {}: {}", identifier, e);
                            None
                        }
                    }
                },
                move |image| Message::ResultImageLoaded {
                    batch,
                    index,
                    image,
                },
            )
        });

        Task::batch(downloads)
    }

    /// Forward window file-drag events to the workflow
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(file_drag_events)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = column![
            text("Reverse Image Search").size(40),
            ui::drop_zone::view(&self.workflow),
            ui::results::search_button(&self.workflow),
            ui::results::view(&self.workflow, &self.gallery),
        ]
        .spacing(24)
        .padding(40)
        .max_width(960)
        .align_x(Alignment::Center);

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn file_drag_events(event: IcedEvent, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        IcedEvent::Window(window::Event::FileHovered(_)) => Some(Message::Workflow(Event::DragEnter)),
        IcedEvent::Window(window::Event::FilesHoveredLeft) => Some(Message::Workflow(Event::DragLeave)),
        IcedEvent::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

/// Run one search request; errors are flattened to a log-friendly reason
async fn search_async(client: SearchClient, file: SelectedFile) -> Result<Vec<state::data::SearchResult>, String> {
    client.search(&file).await.map_err(|e| e.to_string())
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::load()?;
    let client = SearchClient::new(config)?;

    iced::application("Reverse Image Search", ImageSearch::update, ImageSearch::view)
        .subscription(ImageSearch::subscription)
        .theme(ImageSearch::theme)
        .centered()
        .run_with(move || ImageSearch::new(client))?;

    Ok(())
}
