use iced::keyboard;
use iced::widget::{column, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::time::Duration;

mod state;
mod storage;
mod ui;

use state::catalog::Catalog;
use state::data::{seed_images, ImageRecord};
use state::gallery::GalleryState;
use storage::{StoredUpload, UploadError};

/// Main application state
struct Gallery {
    /// The upload catalog database
    catalog: Catalog,
    /// Directory uploaded files are copied into
    upload_dir: PathBuf,
    /// Everything the view renders from
    state: GalleryState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Initial load finished: seed records plus restored uploads
    Loaded(Vec<ImageRecord>),
    /// Show or hide the upload modal
    ToggleUploadModal,
    /// User clicked "Choose Files..." in the upload modal
    PickFiles,
    /// User clicked "Upload" on the selected batch
    BeginUpload,
    /// One file of the batch finished storing (or failed)
    FileStored(Result<StoredUpload, UploadError>),
    /// Trash button on a card: ask for confirmation
    DeleteRequested(usize),
    CancelDelete,
    ConfirmDelete,
    /// Card clicked: open the lightbox at that index
    OpenLightbox(usize),
    CloseLightbox,
    NextImage,
    PrevImage,
    /// Document-level key press, routed to the lightbox by the state
    KeyPressed(keyboard::Key),
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot function without its catalog
        let catalog = Catalog::open_default()
            .expect("Failed to initialize database. Check permissions and disk space.");
        let upload_dir = storage::default_upload_dir();

        let upload_count = catalog.upload_count().unwrap_or(0);
        println!("🖼  Image gallery initialized with {} uploads", upload_count);

        let db_path = catalog.path().to_path_buf();
        let task = Task::perform(load_gallery(db_path, upload_dir.clone()), Message::Loaded);

        (
            Gallery {
                catalog,
                upload_dir,
                state: GalleryState::new(),
            },
            task,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(records) => {
                self.state.finish_load(records);
                Task::none()
            }
            Message::ToggleUploadModal => {
                self.state.toggle_upload_modal();
                Task::none()
            }
            Message::PickFiles => {
                // Show the native file picker, filtered to image types
                let files = FileDialog::new()
                    .set_title("Select Images")
                    .add_filter("Images", storage::ACCEPTED_EXTENSIONS)
                    .pick_files();

                self.state.set_selected_files(files.unwrap_or_default());
                Task::none()
            }
            Message::BeginUpload => match self.state.begin_upload() {
                Some(first) => Task::perform(
                    store_upload(first, self.upload_dir.clone()),
                    Message::FileStored,
                ),
                None => Task::none(),
            },
            Message::FileStored(result) => {
                let record = match result {
                    Ok(stored) => {
                        if let Err(e) = self.catalog.insert_upload(
                            &stored.filename,
                            &stored.filename,
                            stored.dimensions,
                        ) {
                            eprintln!("⚠️  Error cataloging {}: {}", stored.filename, e);
                        }
                        Some(ImageRecord::uploaded(&stored.filename, &stored.filename))
                    }
                    Err(e) => {
                        eprintln!("⚠️  Error storing upload: {}", e);
                        None
                    }
                };

                match self.state.file_stored(record) {
                    Some(next) => Task::perform(
                        store_upload(next, self.upload_dir.clone()),
                        Message::FileStored,
                    ),
                    None => Task::none(),
                }
            }
            Message::DeleteRequested(index) => {
                self.state.set_image_to_delete(index);
                Task::none()
            }
            Message::CancelDelete => {
                self.state.cancel_delete();
                Task::none()
            }
            Message::ConfirmDelete => {
                if let Some(removed) = self.state.confirm_delete() {
                    // Seed records have no file or catalog row to clean up
                    if let Some(filename) = removed.upload_filename() {
                        storage::remove_file(&self.upload_dir, filename);
                        if let Err(e) = self.catalog.remove_upload(filename) {
                            eprintln!("⚠️  Error removing {} from catalog: {}", filename, e);
                        }
                    }
                }
                Task::none()
            }
            Message::OpenLightbox(index) => {
                self.state.open_lightbox(index);
                Task::none()
            }
            Message::CloseLightbox => {
                self.state.close_lightbox();
                Task::none()
            }
            Message::NextImage => {
                self.state.next_image();
                Task::none()
            }
            Message::PrevImage => {
                self.state.prev_image();
                Task::none()
            }
            Message::KeyPressed(key) => {
                self.state.handle_key(&key);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let base = column![
            ui::grid::header(&self.state),
            scrollable(ui::grid::image_grid(&self.state, &self.upload_dir))
                .height(Length::Fill),
        ];

        if self.state.show_lightbox {
            ui::overlay(
                base,
                ui::lightbox::lightbox(&self.state, &self.upload_dir),
                Message::CloseLightbox,
            )
        } else if self.state.image_to_delete.is_some() {
            ui::overlay(base, ui::modal::delete_confirmation(), Message::CancelDelete)
        } else if self.state.show_upload_modal {
            ui::overlay(
                base,
                ui::modal::upload_modal(&self.state),
                Message::ToggleUploadModal,
            )
        } else {
            base.into()
        }
    }

    /// Listen for document-level key presses. The state only acts on
    /// ArrowRight / ArrowLeft / Escape while the lightbox is open.
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| Some(Message::KeyPressed(key)))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application("Image Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}

/// Assemble the initial image list in the background: simulated latency,
/// then seed records plus every upload known to the catalog.
///
/// rusqlite connections are not Send, so this opens its own.
async fn load_gallery(db_path: PathBuf, upload_dir: PathBuf) -> Vec<ImageRecord> {
    // Brief delay so the skeleton cards are visible, as the original gallery had
    tokio::time::sleep(Duration::from_secs(1)).await;

    let mut records = seed_images();

    let catalog = match Catalog::open(db_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("⚠️  Error opening catalog: {}", e);
            return records;
        }
    };

    // Adopt image files sitting in the upload directory that the catalog
    // has never seen (copied in by hand, or left over from a lost database)
    for orphan in storage::scan_upload_dir(&upload_dir) {
        match catalog.contains(&orphan.filename) {
            Ok(true) => {}
            Ok(false) => {
                println!("📁 Adopting untracked upload: {}", orphan.filename);
                if let Err(e) =
                    catalog.insert_upload(&orphan.filename, &orphan.filename, orphan.dimensions)
                {
                    eprintln!("⚠️  Error adopting {}: {}", orphan.filename, e);
                }
            }
            Err(e) => eprintln!("⚠️  Error checking catalog for {}: {}", orphan.filename, e),
        }
    }

    match catalog.all_uploads() {
        Ok(uploads) => records.extend(uploads.iter().map(|upload| upload.record())),
        Err(e) => eprintln!("⚠️  Error reading catalog: {}", e),
    }

    records
}

/// Store one file of the batch, with a short pause so the per-file
/// progress is visible in the modal.
async fn store_upload(source: PathBuf, upload_dir: PathBuf) -> Result<StoredUpload, UploadError> {
    let stored = storage::store_file(source, upload_dir).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    stored
}
