//! Inline error banner

use leptos::prelude::*;

/// Renders `message` when it is set, nothing otherwise.
#[component]
pub fn InlineError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="error-message" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
