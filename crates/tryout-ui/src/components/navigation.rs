//! Top navigation bar

use leptos::prelude::*;
use tryout_core::views::nav;

#[component]
pub fn Navigation() -> impl IntoView {
    view! {
        <header class="app-header">
            <a class="brand" href=nav::LIST>"Tryout"</a>
            <nav class="app-nav">
                <a href=nav::LIST>"Tryouts"</a>
                <a class="btn-primary" href=nav::NEW_TRYOUT>"+ Create Tryout"</a>
            </nav>
        </header>
    }
}
