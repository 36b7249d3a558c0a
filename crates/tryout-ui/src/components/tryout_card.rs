//! Summary card for the tryout list

use chrono::Local;
use leptos::prelude::*;
use tryout_core::display::{
    CARD_DESCRIPTION_CHARS, format_date, format_duration, truncate_description,
};
use tryout_core::models::Tryout;
use tryout_core::views::nav;

/// One tryout in the list grid; the whole card links to its detail page.
#[component]
pub fn TryoutCard(tryout: Tryout) -> impl IntoView {
    let description = truncate_description(&tryout.description, CARD_DESCRIPTION_CHARS).into_owned();
    let created = format_date(&tryout.created_at, &Local);

    view! {
        <a class="tryout-card" href=nav::tryout_detail(&tryout.id)>
            <div class="card-header">
                <h3>{tryout.title}</h3>
                <span class="category-badge">{tryout.category}</span>
            </div>
            <p class="card-description">{description}</p>
            <div class="card-meta">
                <span>{format_duration(tryout.duration)}</span>
                <span>"Created " {created}</span>
            </div>
        </a>
    }
}
