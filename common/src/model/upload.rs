use serde::{Deserialize, Serialize};

/// Name of the multipart field the files endpoint reads the CSV from.
pub const UPLOAD_FIELD: &str = "file";

/// MIME type accepted by the file picker.
pub const CSV_MIME: &str = "text/csv";

/// Metadata of the file currently picked in the upload input.
///
/// The browser handle itself lives in the component; this mirror only carries
/// what the UI needs to display and validate the selection.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// A file counts as CSV when either its extension or its reported MIME
    /// type says so. Browsers on some platforms report an empty or vendor
    /// specific MIME type for `.csv`, hence the extension check.
    pub fn is_csv(&self) -> bool {
        let by_extension = self
            .name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("csv"));
        by_extension || self.mime.eq_ignore_ascii_case(CSV_MIME)
    }
}
