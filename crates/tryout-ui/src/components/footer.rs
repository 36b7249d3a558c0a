//! Page footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>"Tryout - practice quizzes, one true/false question at a time"</p>
        </footer>
    }
}
