use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::content;

#[component]
fn SkillsGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <For
                each=move || content::SKILL_CATEGORIES
                key=|category| category.name
                children=move |category| {
                    view! {
                        <div class="bg-surface p-5 rounded-xl">
                            <h5 class="font-medium text-neutral-light mb-3">{category.name}</h5>
                            <div class="flex flex-wrap gap-2">
                                <For
                                    each=move || category.tech.iter()
                                    key=|tech| **tech
                                    children=move |tech| {
                                        view! {
                                            <span class="px-3 py-1 bg-primary/10 text-primary text-sm rounded-full">
                                                {*tech}
                                            </span>
                                        }
                                    }
                                />
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    view! {
        <div class="relative max-w-2xl mx-auto">
            <div class="absolute left-5 h-full w-0.5 bg-primary/30 top-0" aria-hidden="true"></div>

            <For
                each=move || content::TIMELINE
                key=|entry| entry.period
                children=move |entry| {
                    view! {
                        <div class="relative pl-16 pb-10">
                            <div class="absolute left-3.5 w-4 h-4 rounded-full bg-primary border-4 border-neutral-dark top-1" aria-hidden="true"></div>

                            <div class="bg-surface p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow">
                                <span class="text-primary font-medium">{entry.period}</span>
                                <h5 class="text-xl font-semibold text-neutral-light mt-1 mb-2">
                                    {entry.role} " · " {entry.organization}
                                </h5>
                                <p class="text-text/80">{entry.description}</p>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-neutral-light mb-4">
                        "About " <span class="text-primary">"Me"</span>
                    </h2>
                    <p class="text-lg text-text/80 max-w-2xl mx-auto">
                        "Get to know the developer behind the code"
                    </p>
                </div>

                <div class="flex flex-col lg:flex-row gap-12 items-center">
                    <div class="lg:w-1/3 flex justify-center">
                        <div class="relative w-64 h-64 md:w-80 md:h-80">
                            <div class="absolute inset-0 bg-primary/10 rounded-full blur-xl" aria-hidden="true"></div>
                            <img
                                src="/assets/img/profile.jpg"
                                alt="Abhishek Ranjan"
                                class="relative z-10 w-full h-full object-cover rounded-full border-4 border-primary/20"
                            />
                        </div>
                    </div>

                    <div class="lg:w-2/3">
                        <h3 class="text-2xl font-bold text-neutral-light mb-4">
                            "Full Stack Developer with a Passion for Problem-Solving"
                        </h3>

                        <div class="space-y-4 mb-8 text-text/90">
                            <p>
                                "Hello! I'm " <strong>"Abhishek Ranjan"</strong>
                                ", a Full Stack Developer specializing in modern web \
                                 technologies. I've helped startups and enterprises build \
                                 scalable, performant web applications."
                            </p>
                            <p>
                                "My journey began when I built my first website at 16, and \
                                 since then I've been obsessed with creating digital \
                                 experiences that solve real problems. I believe in writing \
                                 clean, maintainable code and staying updated with industry \
                                 trends."
                            </p>
                            <p>
                                "When I'm not coding, you'll find me contributing to \
                                 open-source projects, writing technical blogs, or exploring \
                                 new hiking trails."
                            </p>
                        </div>

                        <div class="mb-10">
                            <h4 class="text-xl font-semibold text-neutral-light mb-6">
                                "My " <span class="text-primary">"Technical Skills"</span>
                            </h4>
                            <SkillsGrid/>
                        </div>

                        <div class="flex flex-wrap gap-4">
                            <a
                                href=content::RESUME_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 px-6 py-3 bg-primary text-neutral-dark rounded-lg hover:brightness-90 transition"
                            >
                                {Icon::FileText.svg("w-4 h-4")}
                                "Download Resume"
                            </a>
                            <a
                                href="#contact"
                                class="flex items-center gap-2 px-6 py-3 border border-primary text-primary rounded-lg hover:bg-primary/10 transition"
                            >
                                {Icon::Mail.svg("w-4 h-4")}
                                "Contact Me"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="mt-20">
                    <h4 class="text-2xl font-bold text-neutral-light mb-10 text-center">
                        "My " <span class="text-primary">"Journey"</span>
                    </h4>
                    <Timeline/>
                </div>
            </div>
        </section>
    }
}
