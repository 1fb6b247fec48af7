use leptos::*;
use crate::components::star_rating::StarRating;
use crate::models::draft::{ComposeForm, ReviewDraft};
use web_sys::KeyboardEvent;

/// "Create a Review" dialog. Renders only while `form` is open.
///
/// Cancel, Escape and Submit all close it; only Submit calls `on_submit`,
/// with the draft as it stood when the button was pressed.
#[component]
pub fn ReviewForm(
    form: RwSignal<ComposeForm>,
    #[prop(into)] on_submit: Callback<ReviewDraft>,
) -> impl IntoView {
    let cancel = move |_: ev::MouseEvent| form.update(ComposeForm::cancel);

    let submit = move |_: ev::MouseEvent| {
        let submitted = form.try_update(ComposeForm::submit).flatten();
        if let Some(draft) = submitted {
            on_submit.call(draft);
        }
    };

    // Escape is the browser's close request.
    let close_listener = window_event_listener(ev::keydown, move |e: KeyboardEvent| {
        if e.key() == "Escape" && form.with_untracked(ComposeForm::is_open) {
            form.update(ComposeForm::request_close);
        }
    });
    on_cleanup(move || close_listener.remove());

    view! {
        <Show when=move || form.with(ComposeForm::is_open)>
            <div class="modal-backdrop">
                <div class="modal-content" role="dialog" aria-modal="true">
                    <h2 class="modal-title">{ "Create a Review" }</h2>
                    <input
                        type="text"
                        class="input username-input"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.draft().username.clone())
                        on:input=move |e| form.update(|f| f.set_username(event_target_value(&e)))
                    />
                    <input
                        type="text"
                        class="input url-input"
                        placeholder="Image/Video URL"
                        prop:value=move || form.with(|f| f.draft().media_url.clone())
                        on:input=move |e| form.update(|f| f.set_media_url(event_target_value(&e)))
                    />
                    <StarRating
                        default_rating=form.with_untracked(|f| f.draft().rating)
                        show_rating=true
                        on_finish=move |value: u8| form.update(|f| f.set_rating(value))
                    />
                    <textarea
                        class="input text-area description-input"
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.draft().description.clone())
                        on:input=move |e| form.update(|f| f.set_description(event_target_value(&e)))
                    />
                    <div class="modal-actions">
                        <button type="button" class="button button-close" on:click=cancel>
                            { "Cancel" }
                        </button>
                        <button type="button" class="button button-submit" on:click=submit>
                            { "Submit" }
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
