use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::components::icons::Icon;
use crate::content;
use crate::scroll;

/// Fixed header. Elevation and the active-section highlight both derive
/// from the window scroll offset; a nav click sets the active section
/// optimistically so the highlight does not lag the smooth scroll.
#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let elevated = RwSignal::new(false);
    let active = RwSignal::new("home");

    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        elevated.set(scroll::elevated(y));

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let spans = content::SECTION_IDS.iter().filter_map(|id| {
            doc.get_element_by_id(id).map(|el| {
                let rect = el.get_bounding_client_rect();
                (*id, rect.top(), rect.bottom())
            })
        });
        // no straddler -> keep the previous active section
        if let Some(section) = scroll::section_at(scroll::ACTIVE_PROBE_Y, spans) {
            active.set(section);
        }
    });

    let nav_click = move |section: &'static str| {
        active.set(section);
        menu_open.set(false);
    };

    view! {
        <header class=move || format!(
            "fixed w-full top-0 z-50 transition-all duration-300 {}",
            if elevated.get() {
                "bg-surface/90 backdrop-blur shadow-sm"
            } else {
                "bg-transparent"
            }
        )>
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <a
                    href="#home"
                    class="text-2xl font-bold text-neutral-light"
                    on:click=move |_| nav_click("home")
                >
                    <span class="text-primary">"<"</span>
                    "Abhishek"
                    <span class="text-primary">"/>"</span>
                </a>

                <nav class="hidden md:flex items-center gap-8">
                    <For
                        each=move || content::NAV_LINKS
                        key=|link| link.section
                        children=move |link| {
                            view! {
                                <a
                                    href=format!("#{}", link.section)
                                    class=move || format!(
                                        "relative px-1 py-2 text-sm font-medium transition-colors {}",
                                        if active.get() == link.section {
                                            "text-primary"
                                        } else {
                                            "text-text hover:text-primary"
                                        }
                                    )
                                    on:click=move |_| nav_click(link.section)
                                >
                                    {link.label}
                                </a>
                            }
                        }
                    />

                    <a
                        href=content::RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-4 py-2 bg-primary text-neutral-dark text-sm font-medium rounded-lg hover:brightness-90 transition"
                    >
                        {Icon::FileText.svg("w-4 h-4")}
                        "Resume"
                    </a>
                </nav>

                <button
                    class="md:hidden p-2 text-text"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        Icon::Close.svg("w-6 h-6")
                    } else {
                        Icon::Menu.svg("w-6 h-6")
                    }}
                </button>
            </div>

            {move || menu_open.get().then(|| view! {
                <div class="md:hidden fixed inset-0 top-16 bg-surface/95 backdrop-blur-lg px-6 z-40">
                    <nav class="flex flex-col gap-6 py-8">
                        <For
                            each=move || content::NAV_LINKS
                            key=|link| link.section
                            children=move |link| {
                                view! {
                                    <a
                                        href=format!("#{}", link.section)
                                        class=move || format!(
                                            "text-2xl font-medium px-4 py-2 rounded-lg {}",
                                            if active.get() == link.section {
                                                "bg-primary/10 text-primary"
                                            } else {
                                                "text-text hover:bg-neutral-dark/50"
                                            }
                                        )
                                        on:click=move |_| nav_click(link.section)
                                    >
                                        {link.label}
                                    </a>
                                }
                            }
                        />
                    </nav>

                    <div class="flex justify-center gap-4 py-8">
                        <For
                            each=move || content::SOCIAL_LINKS
                            key=|social| social.url
                            children=move |social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-3 bg-neutral-dark/60 rounded-full text-text hover:bg-primary hover:text-neutral-dark transition-colors"
                                        aria-label=social.label
                                    >
                                        {social.icon.svg("w-5 h-5")}
                                    </a>
                                }
                            }
                        />
                    </div>

                    <a
                        href=content::RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center justify-center gap-2 px-6 py-3 bg-primary text-neutral-dark font-medium rounded-lg hover:brightness-90 transition"
                    >
                        {Icon::FileText.svg("w-5 h-5")}
                        "Download Resume"
                    </a>
                </div>
            })}
        </header>
    }
}
