use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::content;
use crate::content::Project;
use crate::content::ProjectFilter;

pub trait FilterTab {
    fn labelled_button(self, sel: RwSignal<ProjectFilter>) -> impl IntoView;
}

impl FilterTab for ProjectFilter {
    fn labelled_button(self, sel: RwSignal<ProjectFilter>) -> impl IntoView {
        view! {
            <button
                class=move || format!(
                    "px-5 py-2 rounded-full text-sm font-medium transition-all {}",
                    if sel.get() == self {
                        "bg-primary text-neutral-dark"
                    } else {
                        "bg-surface text-text hover:bg-surface/70"
                    }
                )
                on:click=move |_| sel.set(self)
            >
                {self.label()}
            </button>
        }
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="bg-surface rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 flex flex-col">
            <div class="relative h-48 overflow-hidden group">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-black/50 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center gap-4">
                    <a
                        href=project.repo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-neutral-light p-3 rounded-full text-surface hover:bg-primary transition-colors"
                        aria-label="Repository"
                    >
                        {Icon::Github.svg("w-5 h-5")}
                    </a>
                    {project.live_url.map(|url| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-neutral-light p-3 rounded-full text-surface hover:bg-primary transition-colors"
                            aria-label="Live demo"
                        >
                            {Icon::ExternalLink.svg("w-5 h-5")}
                        </a>
                    })}
                </div>
            </div>

            <div class="p-6 flex flex-col flex-1">
                <h3 class="text-xl font-bold text-neutral-light mb-2">{project.title}</h3>
                <p class="text-text/80 mb-4">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4 mt-auto">
                    <For
                        each=move || project.tags.iter()
                        key=|tag| **tag
                        children=move |tag| {
                            view! {
                                <span class="px-3 py-1 bg-neutral-dark/60 text-text text-xs rounded-full">
                                    {*tag}
                                </span>
                            }
                        }
                    />
                </div>

                <div class="flex items-center text-sm text-primary font-medium">
                    {Icon::Code.svg("w-4 h-4 mr-2")}
                    <span>"View Case Study"</span>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let active_filter = RwSignal::new(ProjectFilter::All);

    view! {
        <section id="projects" class="py-20 px-6 bg-surface/40">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-neutral-light mb-4">
                        "My " <span class="text-primary">"Projects"</span>
                    </h2>
                    <p class="text-lg text-text/80 max-w-2xl mx-auto">
                        "Here are some of my recent works. Each project represents \
                         unique challenges and solutions."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {content::PROJECT_FILTERS
                        .into_iter()
                        .map(|filter| filter.labelled_button(active_filter))
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || content::visible_projects(active_filter.get())
                        key=|project| project.title
                        children=move |project| view! { <ProjectCard project /> }
                    />
                </div>
            </div>
        </section>
    }
}
