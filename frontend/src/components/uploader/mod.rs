//! CSV uploader: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `UploaderProps` and `UploaderComponent`.
//! - Delegate `update` and `view` to their modules.
//! - On first render, focus the search box and log where requests go.

use gloo_console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UploaderProps;
pub use state::UploaderComponent;

impl Component for UploaderComponent {
    type Message = Msg;
    type Properties = UploaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        UploaderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let config = &ctx.props().config;
            log!(format!(
                "uploader ready: api={} debounce={}ms",
                config.api_base_url, config.debounce_ms
            ));
            if let Some(input) = self.search_input_ref.cast::<HtmlInputElement>() {
                input.focus().ok();
            }
        }
    }
}
