//! Runtime state of the uploader.
//!
//! Two independent inputs (the picked file and the search text) and the list
//! they produce. Request progress is split in two: `uploading` for the file
//! submission and the tracker's in-flight flag for the search, while the view
//! only ever asks `is_loading`.
//!
//! The state transitions live here as plain methods so `update.rs` only
//! wires them to the browser: spawning requests, logging, toasts.

use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use common::error::ApiError;
use common::model::upload::SelectedFile;
use common::model::user::User;
use common::search::SearchTracker;

pub struct UploaderComponent {
    /// Result of the latest accepted search. Empty while the box is empty.
    pub users: Vec<User>,

    /// Browser handle of the picked CSV file, sent as is on submit.
    pub file: Option<File>,

    /// Display metadata of `file`. Set and cleared together with it.
    pub selected: Option<SelectedFile>,

    /// Current content of the search box.
    pub search: String,

    /// Text of the error banner. `None` hides the banner.
    pub error: Option<String>,

    /// `true` between a submit and the upload's response.
    pub uploading: bool,

    pub tracker: SearchTracker,

    /// Reference to the native `<input type="file">`, used to reset it.
    pub file_input_ref: NodeRef,

    /// Reference to the search box, focused on first render.
    pub search_input_ref: NodeRef,
}

impl UploaderComponent {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            file: None,
            selected: None,
            search: String::new(),
            error: None,
            uploading: false,
            tracker: SearchTracker::new(),
            file_input_ref: NodeRef::default(),
            search_input_ref: NodeRef::default(),
        }
    }

    /// Either request is pending. Drives the disabled state of the submit button.
    pub fn is_loading(&self) -> bool {
        self.uploading || self.tracker.is_in_flight()
    }

    /// Forgets the picked file and empties the native input, so picking the
    /// same file again still fires `change`.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.selected = None;
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    /// Validates a newly picked file. On success the metadata is stored and a
    /// leftover banner is dismissed; the caller then stores the browser handle.
    /// A non-CSV pick clears the selection and explains why in the banner.
    pub fn pick_file(&mut self, selected: SelectedFile) -> bool {
        if selected.is_csv() {
            self.selected = Some(selected);
            self.error = None;
            true
        } else {
            self.clear_file();
            self.error = Some(format!("{} is not a CSV file", selected.name));
            false
        }
    }

    /// Marks an upload as started and returns the metadata of the file being
    /// sent, or `None` when nothing is picked or an upload is already running.
    pub fn start_upload(&mut self) -> Option<SelectedFile> {
        if self.uploading {
            return None;
        }
        let uploaded = self.selected.clone()?;
        self.uploading = true;
        Some(uploaded)
    }

    /// Applies the outcome of uploading `uploaded`.
    ///
    /// The selection is only cleared when it still is the uploaded file; a
    /// file picked while the request was running stays selected. Returns the
    /// id of the search to re-run immediately, if any.
    pub fn finish_upload(
        &mut self,
        uploaded: &SelectedFile,
        result: Result<(), ApiError>,
    ) -> Option<u64> {
        self.uploading = false;
        match result {
            Ok(()) => {
                if self.selected.as_ref() == Some(uploaded) {
                    self.clear_file();
                }
                self.tracker.schedule(&self.search)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Stores the search text. Returns the id to fire after the debounce;
    /// an empty box clears the list at once and returns `None`.
    pub fn change_search(&mut self, value: String) -> Option<u64> {
        self.search = value;
        let id = self.tracker.schedule(&self.search);
        if id.is_none() {
            self.users.clear();
        }
        id
    }

    /// Applies a search response. Returns `false` for stale responses, which
    /// leave the state untouched. An error keeps the current list.
    pub fn apply_users(&mut self, id: u64, result: Result<Vec<User>, ApiError>) -> bool {
        if !self.tracker.accept(id) {
            return false;
        }
        match result {
            Ok(users) => self.users = users,
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::user::CsvRow;

    fn csv(name: &str) -> SelectedFile {
        SelectedFile::new(name, 42, "text/csv")
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            row: CsvRow {
                name: name.into(),
                city: "Lima".into(),
                country: "Peru".into(),
                favorite_sport: "Surf".into(),
            },
        }
    }

    fn searched(component: &mut UploaderComponent, query: &str, users: Vec<User>) {
        let id = component.change_search(query.into()).unwrap();
        assert!(component.tracker.begin(id));
        assert!(component.apply_users(id, Ok(users)));
    }

    #[test]
    fn non_csv_pick_is_rejected_with_banner() {
        let mut component = UploaderComponent::new();
        assert!(component.pick_file(csv("a.csv")));

        assert!(!component.pick_file(SelectedFile::new("notes.txt", 3, "text/plain")));
        assert_eq!(component.selected, None);
        assert_eq!(component.error.as_deref(), Some("notes.txt is not a CSV file"));
    }

    #[test]
    fn valid_pick_dismisses_previous_rejection() {
        let mut component = UploaderComponent::new();
        component.pick_file(SelectedFile::new("photo.png", 3, "image/png"));
        assert!(component.error.is_some());

        assert!(component.pick_file(csv("people.csv")));
        assert_eq!(component.error, None);
        assert_eq!(component.selected, Some(csv("people.csv")));
    }

    #[test]
    fn upload_needs_a_file_and_runs_once() {
        let mut component = UploaderComponent::new();
        assert_eq!(component.start_upload(), None);

        component.pick_file(csv("a.csv"));
        assert_eq!(component.start_upload(), Some(csv("a.csv")));
        assert!(component.is_loading());
        assert_eq!(component.start_upload(), None);
    }

    #[test]
    fn successful_upload_clears_selection_and_reruns_search() {
        let mut component = UploaderComponent::new();
        searched(&mut component, "ana", vec![user(1, "Ana")]);
        component.pick_file(csv("a.csv"));
        let uploaded = component.start_upload().unwrap();

        let rerun = component.finish_upload(&uploaded, Ok(()));
        assert!(!component.uploading);
        assert_eq!(component.selected, None);
        let id = rerun.unwrap();
        assert!(component.tracker.begin(id));
    }

    #[test]
    fn successful_upload_with_empty_search_does_not_search() {
        let mut component = UploaderComponent::new();
        component.pick_file(csv("a.csv"));
        let uploaded = component.start_upload().unwrap();

        assert_eq!(component.finish_upload(&uploaded, Ok(())), None);
    }

    #[test]
    fn file_picked_during_upload_stays_selected() {
        let mut component = UploaderComponent::new();
        component.pick_file(csv("a.csv"));
        let uploaded = component.start_upload().unwrap();

        component.pick_file(csv("b.csv"));
        component.finish_upload(&uploaded, Ok(()));

        assert_eq!(component.selected, Some(csv("b.csv")));
        assert_eq!(uploaded.name, "a.csv");
    }

    #[test]
    fn failed_upload_keeps_selection_and_shows_message() {
        let mut component = UploaderComponent::new();
        component.pick_file(csv("a.csv"));
        let uploaded = component.start_upload().unwrap();

        let err = ApiError::rejected(400, r#"{"message":"Invalid header"}"#);
        assert_eq!(component.finish_upload(&uploaded, Err(err)), None);
        assert_eq!(component.selected, Some(csv("a.csv")));
        assert_eq!(component.error.as_deref(), Some("Invalid header"));
        assert!(!component.is_loading());
    }

    #[test]
    fn empty_query_clears_users_at_once() {
        let mut component = UploaderComponent::new();
        searched(&mut component, "a", vec![user(1, "Ana")]);

        assert_eq!(component.change_search(String::new()), None);
        assert!(component.users.is_empty());
    }

    #[test]
    fn search_error_keeps_current_users() {
        let mut component = UploaderComponent::new();
        searched(&mut component, "a", vec![user(1, "Ana"), user(2, "Abel")]);

        let id = component.change_search("ab".into()).unwrap();
        component.tracker.begin(id);
        let err = ApiError::Network("offline".into());
        assert!(component.apply_users(id, Err(err)));

        assert_eq!(component.users.len(), 2);
        assert_eq!(component.error.as_deref(), Some("Network error: offline"));
    }

    #[test]
    fn stale_search_response_is_ignored() {
        let mut component = UploaderComponent::new();
        let old = component.change_search("a".into()).unwrap();
        component.tracker.begin(old);
        let new = component.change_search("ab".into()).unwrap();
        component.tracker.begin(new);

        assert!(!component.apply_users(old, Ok(vec![user(9, "Old")])));
        assert!(component.users.is_empty());
        assert!(component.apply_users(new, Ok(vec![user(1, "Abel")])));
        assert_eq!(component.users[0].row.name, "Abel");
    }
}
