//! View rendering for the uploader component.
//!
//! Layout: a top bar (`#actionables`) with the search box, the upload label,
//! the remove/submit pair and the error banner, followed by the card grid
//! (`#cards-holder`).

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::upload::CSV_MIME;
use common::model::user::User;

use super::helpers::format_size;
use super::messages::Msg;
use super::state::UploaderComponent;
use crate::components::form_actions::FormActionsComponent;
use crate::components::user_card::UserCardComponent;

const EMPTY_RESULT_CTA: &str = "No user found. Upload a new file or update your search!";

pub fn view(component: &UploaderComponent, ctx: &Context<UploaderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <main>
            <div id="actionables">
                { build_search_input(component, link) }
                { build_upload_label(component, link) }
                <FormActionsComponent
                    on_submit={link.callback(|_| Msg::SubmitFile)}
                    on_remove={link.callback(|_| Msg::RemoveFile)}
                    loading={component.is_loading()}
                    visible={component.file.is_some()}
                />
                { build_error_banner(component.error.as_deref(), link.callback(|_| Msg::CloseWarning)) }
            </div>
            { build_cards(&component.users) }
        </main>
    }
}

fn build_search_input(component: &UploaderComponent, link: &Scope<UploaderComponent>) -> Html {
    html! {
        <input
            name="search"
            type="text"
            ref={component.search_input_ref.clone()}
            class={classes!(component.tracker.is_in_flight().then_some("searching"))}
            value={component.search.clone()}
            placeholder="Search"
            oninput={link.callback(|e: InputEvent| {
                Msg::SearchChanged(e.target_unchecked_into::<HtmlInputElement>().value())
            })}
        />
    }
}

/// The native file input is hidden by CSS; the label is the visible button.
/// The picked file's name and size are shown next to it.
fn build_upload_label(component: &UploaderComponent, link: &Scope<UploaderComponent>) -> Html {
    html! {
        <>
            <label class="upload-label">
                <input
                    ref={component.file_input_ref.clone()}
                    type="file"
                    accept={CSV_MIME}
                    onchange={link.callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        Msg::FileChanged(input.files().and_then(|files| files.item(0)))
                    })}
                />
                {"Upload"}
            </label>
            {
                if let Some(selected) = &component.selected {
                    html! {
                        <span class="file-name" title={format_size(selected.size)}>
                            { selected.name.clone() }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn build_error_banner(error: Option<&str>, on_close: Callback<MouseEvent>) -> Html {
    match error {
        Some(message) => html! {
            <div id="error">
                <p>{ message.to_string() }</p>
                <button
                    type="button"
                    title="Remove error warning"
                    onclick={on_close}
                >
                    <i class="material-icons">{"close"}</i>
                </button>
            </div>
        },
        None => html! {},
    }
}

fn build_cards(users: &[User]) -> Html {
    html! {
        <section id="cards-holder">
            {
                if users.is_empty() {
                    html! {
                        <div id="search-cta">
                            <h1>{ EMPTY_RESULT_CTA }</h1>
                        </div>
                    }
                } else {
                    users
                        .iter()
                        .map(|user| html! {
                            <UserCardComponent key={user.id.to_string()} user={user.clone()} />
                        })
                        .collect::<Html>()
                }
            }
        </section>
    }
}
