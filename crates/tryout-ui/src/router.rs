//! Router configuration for the tryout UI
//!
//! This module defines the routes and navigation structure for the application.
//! Links are built with `tryout_core::views::nav`; the constants here are the
//! route patterns those links must match.

use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{NotFound, QuestionFormPage, TryoutDetailPage, TryoutFormPage, TryoutListPage};

/// Route patterns as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const NEW_TRYOUT: &str = "/tryout/new";
    pub const TRYOUT_DETAIL: &str = "/tryout/:id";
    pub const EDIT_TRYOUT: &str = "/tryout/:id/edit";
    pub const NEW_QUESTION: &str = "/tryout/:id/question/new";
    pub const EDIT_QUESTION: &str = "/tryout/:id/question/:question_id/edit";

    /// Route parameter carrying the tryout id
    pub const TRYOUT_ID: &str = "id";
    /// Route parameter carrying the question id
    pub const QUESTION_ID: &str = "question_id";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=TryoutListPage />
                <Route path=(StaticSegment("tryout"), StaticSegment("new")) view=TryoutFormPage />
                <Route path=(StaticSegment("tryout"), ParamSegment("id")) view=TryoutDetailPage />
                <Route
                    path=(StaticSegment("tryout"), ParamSegment("id"), StaticSegment("edit"))
                    view=TryoutFormPage
                />
                <Route
                    path=(
                        StaticSegment("tryout"),
                        ParamSegment("id"),
                        StaticSegment("question"),
                        StaticSegment("new"),
                    )
                    view=QuestionFormPage
                />
                <Route
                    path=(
                        StaticSegment("tryout"),
                        ParamSegment("id"),
                        StaticSegment("question"),
                        ParamSegment("question_id"),
                        StaticSegment("edit"),
                    )
                    view=QuestionFormPage
                />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::HOME, "/");
        assert_eq!(routes::NEW_TRYOUT, "/tryout/new");
        assert_eq!(routes::EDIT_QUESTION, "/tryout/:id/question/:question_id/edit");
    }

    #[test]
    fn test_router_component_exists() {
        let _component = AppRouter;
    }

    #[test]
    fn test_all_page_components_exist() {
        // Verify all page components compile
        let _list = TryoutListPage;
        let _detail = TryoutDetailPage;
        let _tryout_form = TryoutFormPage;
        let _question_form = QuestionFormPage;
        let _not_found = NotFound;
    }
}
