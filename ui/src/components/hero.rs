use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center overflow-hidden px-6 py-24 bg-gradient-to-br from-surface to-neutral-dark">
            // blurred colour blobs behind everything
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-primary/10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-72 h-72 bg-accent/10 rounded-full blur-3xl"></div>
                <div class="absolute top-1/3 right-1/3 w-48 h-48 bg-purple-500/10 rounded-full blur-3xl"></div>
            </div>

            <div class="max-w-6xl mx-auto relative z-10">
                <div class="flex flex-col lg:flex-row items-center justify-between gap-12">
                    <div class="lg:w-1/2 text-center lg:text-left">
                        <p class="text-primary font-mono mb-4">"Hello, my name is"</p>

                        <h1 class="text-5xl md:text-7xl font-bold text-neutral-light mb-6 leading-tight">
                            "Abhishek " <span class="text-primary">"Ranjan"</span>
                        </h1>

                        <h2 class="text-2xl md:text-3xl font-medium text-text mb-8">
                            "I build " <span class="text-neutral-light font-bold">"digital experiences"</span> " that matter"
                        </h2>

                        <p class="text-lg text-text/80 mb-10 max-w-2xl mx-auto lg:mx-0">
                            "Full Stack Developer specializing in modern web technologies \
                             with a focus on performance, accessibility, and clean code."
                        </p>

                        <div class="flex flex-wrap justify-center lg:justify-start gap-4">
                            <a
                                href="#projects"
                                class="px-8 py-4 bg-primary text-neutral-dark font-medium rounded-lg hover:brightness-90 transition"
                            >
                                "View My Projects"
                            </a>
                            <a
                                href="#contact"
                                class="px-8 py-4 border-2 border-primary text-primary font-medium rounded-lg hover:bg-primary/10 transition"
                            >
                                "Let's Collaborate"
                            </a>
                        </div>
                    </div>

                    // terminal-style card, floating slowly
                    <div class="lg:w-1/2 flex justify-center animate-float">
                        <div class="relative w-full max-w-lg">
                            <div class="absolute -inset-4 bg-primary/20 rounded-3xl blur-xl" aria-hidden="true"></div>
                            <div class="relative bg-surface/50 backdrop-blur-sm border border-text/20 rounded-2xl overflow-hidden p-8">
                                <div class="flex items-center space-x-4 mb-6">
                                    <div class="flex space-x-2" aria-hidden="true">
                                        <div class="w-3 h-3 rounded-full bg-red-500"></div>
                                        <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                                        <div class="w-3 h-3 rounded-full bg-green-500"></div>
                                    </div>
                                    <div class="text-sm text-text/70 font-mono">"about-me.rs"</div>
                                </div>

                                <pre class="text-sm md:text-base text-text font-mono overflow-x-auto">
                                    <code>
                                        {r#"let developer = Developer {
    name: "Abhishek Ranjan",
    role: "Full Stack Developer",
    skills: ["React", "Node.js", "Rust"],
    passion: "Building scalable web apps",
    available_for_work: true,
};"#}
                                    </code>
                                </pre>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // scroll hint
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-float" aria-hidden="true">
                <div class="w-6 h-10 border-2 border-primary rounded-full flex justify-center">
                    <div class="w-1 h-2 bg-primary rounded-full mt-2"></div>
                </div>
            </div>
        </section>
    }
}
