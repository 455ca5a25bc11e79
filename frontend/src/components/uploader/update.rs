//! Update function for the uploader component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the
//! state and returns whether the view has to re-render. Network work is
//! spawned with `spawn_local` and reports back through the component link.
//!
//! Search flow
//! - `SearchChanged` stores the text and asks the tracker for a query id.
//!   An empty box clears the list at once; otherwise a timer is started that
//!   sends `RunSearch(id)` after the configured debounce.
//! - `RunSearch` only sends the request if `id` is still the latest edit, so
//!   timers started by earlier keystrokes fire into nothing.
//! - `UsersLoaded` only applies results of the latest in-flight query.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::helpers::{log_error, selected_file_of, show_toast};
use super::messages::Msg;
use super::state::UploaderComponent;

pub fn update(component: &mut UploaderComponent, ctx: &Context<UploaderComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FileChanged(None) => {
            component.clear_file();
            true
        }
        Msg::FileChanged(Some(file)) => {
            if component.pick_file(selected_file_of(&file)) {
                component.file = Some(file);
            }
            true
        }
        Msg::RemoveFile => {
            component.clear_file();
            true
        }
        Msg::SubmitFile => {
            let Some(file) = component.file.clone() else {
                return false;
            };
            let Some(uploaded) = component.start_upload() else {
                return false;
            };

            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::upload_file(&config, &file).await;
                link.send_message(Msg::UploadFinished { uploaded, result });
            });
            true
        }
        Msg::UploadFinished { uploaded, result } => {
            match &result {
                Ok(()) => {
                    log!("uploaded", &uploaded.name);
                    show_toast(&format!("{} uploaded.", uploaded.name));
                }
                Err(err) => log_error(err),
            }
            // New rows may match what is already typed.
            if let Some(id) = component.finish_upload(&uploaded, result) {
                ctx.link().send_message(Msg::RunSearch(id));
            }
            true
        }
        Msg::SearchChanged(value) => {
            if let Some(id) = component.change_search(value) {
                let delay = ctx.props().config.debounce_ms;
                let link = ctx.link().clone();
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    link.send_message(Msg::RunSearch(id));
                });
            }
            true
        }
        Msg::RunSearch(id) => {
            if !component.tracker.begin(id) {
                return false;
            }

            let query = component.search.clone();
            let config = ctx.props().config.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::fetch_users(&config, &query).await;
                link.send_message(Msg::UsersLoaded { id, result });
            });
            true
        }
        Msg::UsersLoaded { id, result } => {
            if let Err(err) = &result {
                log_error(err);
            }
            component.apply_users(id, result)
        }
        Msg::CloseWarning => component.error.take().is_some(),
    }
}
