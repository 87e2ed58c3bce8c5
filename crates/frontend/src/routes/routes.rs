use crate::estimation::view::EstimatorPage;
use crate::layout::navbar::NavBar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=EstimatorPage />
                </Routes>
            </main>
        </Router>
    }
}
