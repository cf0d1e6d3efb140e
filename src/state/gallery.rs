/// Gallery view-state
///
/// Holds the ordered image list, the modal/lightbox toggles and the upload
/// progress, and applies every user action as a synchronous mutation. The
/// async parts (seed load, per-file store) live in main.rs and report back
/// through messages; this struct stays pure so it can be tested directly.
use std::path::PathBuf;

use iced::keyboard::{key, Key};

use super::data::ImageRecord;

/// Maximum number of files accepted in one upload batch.
/// Extra selections are silently dropped.
pub const MAX_BATCH_SIZE: usize = 10;

/// Severity of a transient notice shown in the header area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A short status message standing in for a toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// View-state for the whole gallery window
#[derive(Debug)]
pub struct GalleryState {
    /// Ordered image list; order is both display and lightbox order
    pub images: Vec<ImageRecord>,
    /// True until the initial (simulated-latency) load completes
    pub is_loading: bool,
    /// Upload modal visibility
    pub show_upload_modal: bool,
    /// Files picked for the pending batch, capped at MAX_BATCH_SIZE
    pub selected_files: Vec<PathBuf>,
    /// True while the per-file upload chain is running
    pub is_uploading: bool,
    /// Whole-percent upload progress, 0..=100
    pub upload_progress: u8,
    /// Index marked for deletion; Some(_) shows the confirmation dialog
    pub image_to_delete: Option<usize>,
    /// Lightbox visibility
    pub show_lightbox: bool,
    /// Index the lightbox is showing
    pub current_image_index: usize,
    /// Transient status message; replaced on the next action that sets one
    pub notice: Option<Notice>,

    upload_queue: Vec<PathBuf>,
    upload_total: usize,
    upload_done: usize,
}

impl GalleryState {
    pub fn new() -> Self {
        GalleryState {
            images: Vec::new(),
            is_loading: true,
            show_upload_modal: false,
            selected_files: Vec::new(),
            is_uploading: false,
            upload_progress: 0,
            image_to_delete: None,
            show_lightbox: false,
            current_image_index: 0,
            notice: None,
            upload_queue: Vec::new(),
            upload_total: 0,
            upload_done: 0,
        }
    }

    /// Complete the initial load. The list is only seeded once; a second
    /// load event leaves an already-populated gallery untouched.
    pub fn finish_load(&mut self, records: Vec<ImageRecord>) {
        if self.images.is_empty() {
            self.images = records;
        }
        self.is_loading = false;
    }

    /// Show or hide the upload modal, resetting the batch state either way
    pub fn toggle_upload_modal(&mut self) {
        self.show_upload_modal = !self.show_upload_modal;
        self.selected_files.clear();
        self.upload_progress = 0;
        self.is_uploading = false;
    }

    /// Record the picker's selection, keeping at most MAX_BATCH_SIZE files
    pub fn set_selected_files(&mut self, mut files: Vec<PathBuf>) {
        files.truncate(MAX_BATCH_SIZE);
        self.selected_files = files;
    }

    /// Start the upload chain over the selected files.
    ///
    /// Returns the first file to store, or None (with an error notice) when
    /// nothing is selected.
    pub fn begin_upload(&mut self) -> Option<PathBuf> {
        if self.selected_files.is_empty() {
            self.notice = Some(Notice::error("No files selected."));
            return None;
        }

        self.upload_total = self.selected_files.len();
        self.upload_done = 0;
        self.upload_progress = 0;
        self.is_uploading = true;

        // Pop from the back; reverse so files store in selection order
        self.upload_queue = std::mem::take(&mut self.selected_files);
        self.upload_queue.reverse();
        self.upload_queue.pop()
    }

    /// Record one finished file and advance the progress percentage.
    ///
    /// `record` is None when storing failed; the failure still counts
    /// toward progress so the chain terminates. Returns the next file to
    /// store, or None when the batch is complete.
    pub fn file_stored(&mut self, record: Option<ImageRecord>) -> Option<PathBuf> {
        if let Some(record) = record {
            self.images.push(record);
        }
        self.upload_done += 1;
        self.upload_progress = (self.upload_done * 100 / self.upload_total.max(1)) as u8;

        let next = self.upload_queue.pop();
        if next.is_none() {
            self.is_uploading = false;
            self.show_upload_modal = false;
            self.notice = Some(Notice::success(format!(
                "{} image(s) uploaded successfully!",
                self.upload_total
            )));
        }
        next
    }

    /// Mark the image at `index` for deletion, opening the confirmation dialog
    pub fn set_image_to_delete(&mut self, index: usize) {
        self.image_to_delete = Some(index);
    }

    /// Dismiss the confirmation dialog without deleting
    pub fn cancel_delete(&mut self) {
        self.image_to_delete = None;
    }

    /// Remove the marked image and return it so the caller can clean up
    /// its file. The stored index is positional and is not re-validated
    /// against list changes; an out-of-range index is dropped.
    pub fn confirm_delete(&mut self) -> Option<ImageRecord> {
        let index = self.image_to_delete.take()?;
        if index >= self.images.len() {
            return None;
        }
        let removed = self.images.remove(index);
        self.notice = Some(Notice::info("Image deleted."));
        Some(removed)
    }

    /// The record the lightbox is showing, if the index is in range
    pub fn current_image(&self) -> Option<&ImageRecord> {
        self.images.get(self.current_image_index)
    }

    pub fn open_lightbox(&mut self, index: usize) {
        self.current_image_index = index;
        self.show_lightbox = true;
    }

    pub fn close_lightbox(&mut self) {
        self.show_lightbox = false;
    }

    /// Step to the next image, wrapping past the end
    pub fn next_image(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current_image_index = (self.current_image_index + 1) % self.images.len();
    }

    /// Step to the previous image, wrapping before the start
    pub fn prev_image(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current_image_index =
            (self.current_image_index + self.images.len() - 1) % self.images.len();
    }

    /// Route a key press. Arrow keys and Escape act on the lightbox and
    /// only while it is open; everything else is ignored.
    pub fn handle_key(&mut self, key: &Key) {
        if !self.show_lightbox {
            return;
        }
        match key {
            Key::Named(key::Named::ArrowRight) => self.next_image(),
            Key::Named(key::Named::ArrowLeft) => self.prev_image(),
            Key::Named(key::Named::Escape) => self.close_lightbox(),
            _ => {}
        }
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::seed_images;

    fn loaded_state() -> GalleryState {
        let mut state = GalleryState::new();
        state.finish_load(seed_images());
        state
    }

    #[test]
    fn test_finish_load_seeds_once() {
        let mut state = GalleryState::new();
        assert!(state.is_loading);

        state.finish_load(seed_images());
        assert!(!state.is_loading);
        assert_eq!(state.images.len(), 6);

        // A second load must not duplicate the seeds
        state.finish_load(seed_images());
        assert_eq!(state.images.len(), 6);
    }

    #[test]
    fn test_upload_appends_records_and_finishes() {
        let mut state = loaded_state();
        state.toggle_upload_modal();
        state.set_selected_files(vec![
            PathBuf::from("/tmp/a.png"),
            PathBuf::from("/tmp/b.jpg"),
            PathBuf::from("/tmp/c.gif"),
        ]);

        let mut next = state.begin_upload();
        assert!(state.is_uploading);

        let mut stored = 0;
        while let Some(path) = next {
            let filename = path.file_name().unwrap().to_string_lossy().to_string();
            next = state.file_stored(Some(ImageRecord::uploaded(&filename, &filename)));
            stored += 1;
        }

        assert_eq!(stored, 3);
        assert_eq!(state.images.len(), 9);
        assert_eq!(state.upload_progress, 100);
        assert!(!state.is_uploading);
        assert!(!state.show_upload_modal);
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Success);
    }

    #[test]
    fn test_upload_progress_is_incremental() {
        let mut state = loaded_state();
        state.set_selected_files(vec![
            PathBuf::from("/tmp/a.png"),
            PathBuf::from("/tmp/b.png"),
        ]);

        let first = state.begin_upload().unwrap();
        assert_eq!(state.upload_progress, 0);
        assert_eq!(first, PathBuf::from("/tmp/a.png"));

        let second = state.file_stored(Some(ImageRecord::uploaded("a.png", "a.png")));
        assert_eq!(state.upload_progress, 50);
        assert_eq!(second, Some(PathBuf::from("/tmp/b.png")));

        assert!(state
            .file_stored(Some(ImageRecord::uploaded("b.png", "b.png")))
            .is_none());
        assert_eq!(state.upload_progress, 100);
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let mut state = loaded_state();
        assert!(state.begin_upload().is_none());
        assert!(!state.is_uploading);
        assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
        assert_eq!(state.images.len(), 6);
    }

    #[test]
    fn test_selection_is_capped_at_batch_size() {
        let mut state = loaded_state();
        let files = (0..15)
            .map(|i| PathBuf::from(format!("/tmp/{i}.png")))
            .collect();
        state.set_selected_files(files);
        assert_eq!(state.selected_files.len(), MAX_BATCH_SIZE);
    }

    #[test]
    fn test_failed_store_still_advances_progress() {
        let mut state = loaded_state();
        state.set_selected_files(vec![PathBuf::from("/tmp/bad.png")]);
        state.begin_upload();

        assert!(state.file_stored(None).is_none());
        assert_eq!(state.images.len(), 6); // nothing appended
        assert_eq!(state.upload_progress, 100);
        assert!(!state.is_uploading);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_shifts() {
        let mut state = loaded_state();
        let third = state.images[3].clone();

        state.set_image_to_delete(2);
        let removed = state.confirm_delete().unwrap();

        assert_eq!(removed.name(), "Abstract Art");
        assert_eq!(state.images.len(), 5);
        assert_eq!(state.images[2], third);
        assert!(state.image_to_delete.is_none());
    }

    #[test]
    fn test_cancel_delete_keeps_the_image() {
        let mut state = loaded_state();
        state.set_image_to_delete(0);
        state.cancel_delete();
        assert!(state.image_to_delete.is_none());
        assert_eq!(state.images.len(), 6);
    }

    #[test]
    fn test_stale_delete_index_is_dropped() {
        let mut state = loaded_state();
        state.set_image_to_delete(10);
        assert!(state.confirm_delete().is_none());
        assert_eq!(state.images.len(), 6);
    }

    #[test]
    fn test_lightbox_navigation_wraps() {
        let mut state = loaded_state();

        state.open_lightbox(5);
        state.next_image();
        assert_eq!(state.current_image_index, 0);

        state.prev_image();
        assert_eq!(state.current_image_index, 5);
    }

    #[test]
    fn test_navigation_on_empty_list_is_a_noop() {
        let mut state = GalleryState::new();
        state.next_image();
        state.prev_image();
        assert_eq!(state.current_image_index, 0);
    }

    #[test]
    fn test_escape_closes_open_lightbox() {
        let mut state = loaded_state();
        state.open_lightbox(1);

        state.handle_key(&Key::Named(key::Named::Escape));
        assert!(!state.show_lightbox);
    }

    #[test]
    fn test_arrow_keys_step_only_while_open() {
        let mut state = loaded_state();

        // Closed lightbox: keys are ignored
        state.handle_key(&Key::Named(key::Named::ArrowRight));
        assert_eq!(state.current_image_index, 0);

        state.open_lightbox(0);
        state.handle_key(&Key::Named(key::Named::ArrowRight));
        assert_eq!(state.current_image_index, 1);
        state.handle_key(&Key::Named(key::Named::ArrowLeft));
        assert_eq!(state.current_image_index, 0);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut state = loaded_state();
        state.open_lightbox(2);
        state.handle_key(&Key::Character("x".into()));
        assert_eq!(state.current_image_index, 2);
        assert!(state.show_lightbox);
    }
}
