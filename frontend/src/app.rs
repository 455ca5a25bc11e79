use crate::components::uploader::UploaderComponent;
use common::config::ClientConfig;
use yew::{html, Component, Context, Html};

pub struct App {
    config: ClientConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: ClientConfig::from_env_values(
                option_env!("UPLOADER_API_BASE_URL"),
                option_env!("UPLOADER_DEBOUNCE_MS"),
            ),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <UploaderComponent config={self.config.clone()} />
        }
    }
}
