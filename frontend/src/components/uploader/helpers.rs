//! Small utilities shared by `update.rs` and `view.rs`.
//!
//! - Reading display metadata off a browser `File`.
//! - Human readable byte counts for the picked file.
//! - Console logging of failed requests.
//! - Transient toast notifications for successful uploads.

use gloo_console::error;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::error::ApiError;
use common::model::upload::SelectedFile;

/// Copies name, size and MIME type of a picked file into a `SelectedFile`.
pub fn selected_file_of(file: &web_sys::File) -> SelectedFile {
    let file = gloo_file::File::from(file.clone());
    SelectedFile::new(file.name(), file.size(), file.raw_mime_type())
}

/// Formats a byte count with thousands separators, e.g. `12,345 bytes`.
pub fn format_size(bytes: u64) -> String {
    match bytes {
        1 => "1 byte".to_string(),
        n => format!("{} bytes", n.to_formatted_string(&Locale::en)),
    }
}

/// Logs a failed request to the console. The banner text is set by the state.
pub fn log_error(err: &ApiError) {
    error!(format!("{:?}", err));
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` and removed again after
/// three seconds, outside of Yew's virtual DOM.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
