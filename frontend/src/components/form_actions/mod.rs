use yew::prelude::*;

/// Remove/submit button pair shown next to the upload label.
///
/// Stateless: the parent owns the picked file and the loading flag and only
/// gets notified through the two callbacks.
pub struct FormActionsComponent;

#[derive(Properties, PartialEq)]
pub struct FormActionsProps {
    pub on_submit: Callback<()>,
    pub on_remove: Callback<()>,
    pub loading: bool,
    /// Whether a file is picked. Widens the form to show both buttons.
    pub visible: bool,
}

impl Component for FormActionsComponent {
    type Message = ();
    type Properties = FormActionsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormActionsComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_submit = {
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        };
        let on_remove = props.on_remove.reform(|_: MouseEvent| ());

        html! {
            <form
                id="file-actions"
                class={classes!(props.visible.then_some("shared-wd"))}
                onsubmit={on_submit}
            >
                <button
                    class="file-action"
                    type="button"
                    id="eject-file"
                    title="Remove CSV file"
                    onclick={on_remove}
                >
                    <i class="material-icons">{"close"}</i>
                </button>

                <button
                    disabled={props.loading}
                    class="file-action"
                    type="submit"
                    title={submit_title(props.loading)}
                >
                    <i class="material-icons">{"upload"}</i>
                </button>
            </form>
        }
    }
}

fn submit_title(loading: bool) -> &'static str {
    if loading {
        "Submitting CSV file"
    } else {
        "Submit CSV file"
    }
}
