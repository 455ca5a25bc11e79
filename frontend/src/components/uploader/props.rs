//! Properties of the `UploaderComponent`.

use common::config::ClientConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UploaderProps {
    /// Backend location and debounce delay. Defaults to a backend on
    /// `http://localhost:3000` and a 400 ms debounce.
    #[prop_or_default]
    pub config: ClientConfig,
}
