use leptos::prelude::*;

/// Static navigation chrome. Purely presentational: no state, no logic.
#[component]
pub fn NavBar() -> impl IntoView {
    let links = vec![("#", "Home"), ("#", "Features"), ("#", "Pricing")];

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="#">"COCOMO"</a>
            <ul class="navbar__links">
                {links.into_iter().map(|(href, title)| {
                    view! {
                        <li class="navbar__item">
                            <a class="navbar__link" href=href>{title}</a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
