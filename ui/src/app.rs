use leptos::prelude::*;
use leptos_router::components::Router;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::routes::RoutesMenu;

use leptos_meta::Title;
use leptos_meta::provide_meta_context;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Router>
        <Title text="Abhishek Ranjan — Full Stack Developer"/>

        <Header/>

        <main class="bg-neutral-dark text-text">
          <RoutesMenu/>
        </main>

        <Footer/>
      </Router>
    }
}
