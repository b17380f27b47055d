use leptos::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::hero::Hero;
use crate::components::projects::ProjectsSection;

/// The whole site is one page; each child renders its own `<section id>`
/// so the Header's anchor targets stay stable.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <AboutSection/>
        <ProjectsSection/>
        <ContactSection/>
    }
}
