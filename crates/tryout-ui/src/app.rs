//! Main application component
//!
//! Sets up the API context, the static chrome and the router.

use leptos::prelude::*;

use crate::api::provide_api;
use crate::components::{Footer, Navigation};
use crate::router::AppRouter;

/// Main application component with router integration
#[component]
pub fn App() -> impl IntoView {
    provide_api();

    view! {
        <div class="app-container">
            <Navigation />
            <main class="app-main">
                <AppRouter />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_component_exists() {
        // Compile-time test - if this compiles, the component is valid
        let _component = App;
    }
}
