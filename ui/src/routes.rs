// ui/src/routes.rs
use leptos::prelude::*;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::home::Home;

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p class="p-8">"404 – not found"</p> }>
        <Route path=path!("") view=Home />
      </Routes>
    }
}
