use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::content;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-surface text-text/80 pt-20 pb-10 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-16">
                    <div class="lg:col-span-2">
                        <div class="flex items-center gap-2 mb-6">
                            <span class="text-2xl font-bold text-neutral-light">
                                <span class="text-primary">"<"</span>
                                "Abhishek"
                                <span class="text-primary">"/>"</span>
                            </span>
                        </div>
                        <p class="mb-6 max-w-md">
                            "Full Stack Developer passionate about building exceptional \
                             digital experiences that solve real problems."
                        </p>
                        <div class="flex gap-4">
                            <For
                                each=move || content::SOCIAL_LINKS
                                key=|social| social.url
                                children=move |social| {
                                    view! {
                                        <a
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="bg-neutral-dark/60 p-3 rounded-full text-text hover:bg-primary hover:text-neutral-dark transition-colors"
                                            aria-label=social.label
                                        >
                                            {social.icon.svg("w-5 h-5")}
                                        </a>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <For
                        each=move || content::FOOTER_GROUPS
                        key=|group| group.title
                        children=move |group| {
                            view! {
                                <div>
                                    <h4 class="text-lg font-semibold text-neutral-light mb-6">
                                        {group.title}
                                    </h4>
                                    <ul class="space-y-3">
                                        <For
                                            each=move || group.links.iter()
                                            key=|link| link.label
                                            children=move |link| {
                                                view! {
                                                    <li>
                                                        <a
                                                            href=link.url
                                                            class="hover:text-primary transition-colors"
                                                        >
                                                            {link.label}
                                                        </a>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="border-t border-text/10 my-8"></div>

                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="flex items-center gap-1">
                        "© 2026 Abhishek Ranjan. Made with"
                        <span class="text-primary mx-1">{Icon::Heart.svg("w-4 h-4")}</span>
                        "in India"
                    </p>

                    <div class="flex gap-6">
                        <a href="/privacy" class="hover:text-primary transition-colors">"Privacy Policy"</a>
                        <a href="/terms" class="hover:text-primary transition-colors">"Terms"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
