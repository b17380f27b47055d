use leptos::ev::SubmitEvent;
use leptos::leptos_dom::logging::console_error;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons::Icon;
use crate::content;

pub mod form;
pub mod transport;

use form::ContactForm;
use form::Field;
use form::Phase;
use transport::Submitter;

fn input_class(has_error: bool) -> String {
    format!(
        "w-full px-4 py-3 rounded-lg border bg-neutral-dark/60 text-neutral-light \
         focus:outline-none focus:ring-2 {}",
        if has_error {
            "border-red-500 focus:ring-red-500"
        } else {
            "border-text/20 focus:ring-primary"
        }
    )
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="bg-surface rounded-xl p-8 h-full">
            <h3 class="text-2xl font-bold text-neutral-light mb-6">"Contact Information"</h3>

            <div class="space-y-6">
                <For
                    each=move || content::CONTACT_METHODS
                    key=|method| method.title
                    children=move |method| {
                        view! {
                            <div class="flex items-start gap-4">
                                <div class="p-3 bg-primary/10 rounded-lg text-primary">
                                    {method.icon.svg("w-6 h-6")}
                                </div>
                                <div>
                                    <h4 class="font-medium text-neutral-light">{method.title}</h4>
                                    <a
                                        href=method.action
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-text/80 hover:text-primary transition-colors"
                                    >
                                        {method.value}
                                    </a>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="mt-12">
                <h4 class="font-medium text-neutral-light mb-4">"Follow Me"</h4>
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
                                    class="p-3 bg-neutral-dark/60 rounded-lg text-text hover:bg-primary hover:text-neutral-dark transition-colors"
                                    aria-label=social.label
                                >
                                    {social.icon.svg("w-5 h-5")}
                                </a>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    // only swap the success panel in and out on actual phase changes, not
    // on every keystroke into the form signal
    let phase = Memo::new(move |_| form.with(|f| f.phase));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut outbound = None;
        form.update(|f| outbound = f.try_submit());
        let Some(message) = outbound else { return };

        spawn_local(async move {
            let result = Submitter::Http.send(&message).await;
            if let Err(err) = &result {
                console_error(&format!("contact submission failed: {err}"));
            }
            form.update(|f| f.submit_finished(result));
        });
    };

    let field_error = move |field: Field| {
        form.with(|f| f.errors.get(field)).map(|msg| {
            view! { <p class="mt-1 text-sm text-red-500">{msg}</p> }
        })
    };

    view! {
        <section id="contact" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-neutral-light mb-4">
                        "Get In " <span class="text-primary">"Touch"</span>
                    </h2>
                    <p class="text-lg text-text/80 max-w-2xl mx-auto">
                        "Have a project in mind or want to discuss potential \
                         opportunities? Feel free to reach out!"
                    </p>
                </div>

                <div class="flex flex-col lg:flex-row gap-12">
                    <div class="lg:w-1/3">
                        <ContactInfo/>
                    </div>

                    <div class="lg:w-2/3">
                        <div class="bg-surface rounded-xl p-8 h-full">
                            {move || match phase.get() {
                                Phase::Succeeded => view! {
                                    <div class="text-center py-12">
                                        <div class="w-20 h-20 bg-primary/10 rounded-full flex items-center justify-center mx-auto mb-6 text-primary">
                                            <svg class="w-10 h-10" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                                                <path d="M5 13l4 4L19 7"/>
                                            </svg>
                                        </div>
                                        <h3 class="text-2xl font-bold text-neutral-light mb-2">"Message Sent!"</h3>
                                        <p class="text-text/80 mb-6">
                                            "Thank you for reaching out. I'll get back to you soon."
                                        </p>
                                        <button
                                            class="px-6 py-2 bg-primary text-neutral-dark rounded-lg hover:brightness-90 transition"
                                            on:click=move |_| form.update(|f| f.reset())
                                        >
                                            "Send Another Message"
                                        </button>
                                    </div>
                                }.into_any(),

                                _ => view! {
                                    <h3 class="text-2xl font-bold text-neutral-light mb-6">"Send Me a Message"</h3>
                                    <form on:submit=on_submit novalidate=true>
                                        <div class="space-y-6">
                                            <div>
                                                <label class="block text-sm font-medium text-text mb-2">"Your Name"</label>
                                                <input
                                                    id="name"
                                                    name="name"
                                                    type="text"
                                                    placeholder="John Doe"
                                                    prop:value=move || form.with(|f| f.name.clone())
                                                    on:input=move |ev| form.update(|f| {
                                                        f.edit(Field::Name, event_target_value(&ev))
                                                    })
                                                    class=move || input_class(
                                                        form.with(|f| f.errors.get(Field::Name).is_some())
                                                    )
                                                />
                                                {move || field_error(Field::Name)}
                                            </div>

                                            <div>
                                                <label class="block text-sm font-medium text-text mb-2">"Email Address"</label>
                                                <input
                                                    id="email"
                                                    name="email"
                                                    type="email"
                                                    placeholder="john@example.com"
                                                    prop:value=move || form.with(|f| f.email.clone())
                                                    on:input=move |ev| form.update(|f| {
                                                        f.edit(Field::Email, event_target_value(&ev))
                                                    })
                                                    class=move || input_class(
                                                        form.with(|f| f.errors.get(Field::Email).is_some())
                                                    )
                                                />
                                                {move || field_error(Field::Email)}
                                            </div>

                                            <div>
                                                <label class="block text-sm font-medium text-text mb-2">"Your Message"</label>
                                                <textarea
                                                    id="message"
                                                    name="message"
                                                    rows="5"
                                                    placeholder="Hi Abhishek, I'd like to talk about..."
                                                    prop:value=move || form.with(|f| f.message.clone())
                                                    on:input=move |ev| form.update(|f| {
                                                        f.edit(Field::Message, event_target_value(&ev))
                                                    })
                                                    class=move || input_class(
                                                        form.with(|f| f.errors.get(Field::Message).is_some())
                                                    )
                                                ></textarea>
                                                {move || field_error(Field::Message)}
                                            </div>

                                            {move || form.with(|f| f.submit_error).map(|msg| view! {
                                                <p class="text-sm text-red-500" role="alert">{msg}</p>
                                            })}

                                            <button
                                                type="submit"
                                                prop:disabled=move || form.with(|f| f.phase == Phase::Submitting)
                                                class="w-full px-6 py-3 bg-primary text-neutral-dark font-medium rounded-lg \
                                                       hover:brightness-90 transition disabled:opacity-70 disabled:cursor-not-allowed \
                                                       flex items-center justify-center gap-2"
                                            >
                                                {move || if form.with(|f| f.phase == Phase::Submitting) {
                                                    "Sending…"
                                                } else {
                                                    "Send Message"
                                                }}
                                            </button>
                                        </div>
                                    </form>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
