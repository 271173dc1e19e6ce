use leptos::{either::Either, html, prelude::*};

use super::reveal::{entrance_style, reveal_class, use_reveal, SectionHeader};
use super::IconGlyph;
use crate::contact::{ContactForm, Field, SUBMIT_DELAY};
use crate::content::{copyright_year, portfolio};
use crate::reveal::{Entrance, Stagger};

const METHODS: Stagger = Stagger::new(300, 100);
const FIELD_CLASS: &str = "w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-blue-500 focus:ring-2 focus:ring-blue-500/20 transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let profile = &portfolio().profile;
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.try_update(|f| f.begin_submit()) != Some(true) {
            return;
        }
        log::debug!("contact form submitted");
        set_timeout(
            move || {
                form.update(|f| f.finish_submit());
                if let Err(err) = window().alert_with_message("Message sent successfully!") {
                    log::warn!("could not confirm submission: {err:?}");
                }
            },
            SUBMIT_DELAY,
        );
    };
    let submitting = move || form.with(|f| f.is_submitting());
    let year = copyright_year().map(|y| format!("{y} ")).unwrap_or_default();

    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="Get In Touch"
                    subtitle="I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology"
                    gradient="from-pink-400 to-red-400"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div
                        class=move || reveal_class(in_view.get(), Entrance::FromLeft, "space-y-8")
                        style=entrance_style(200)
                    >
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-6">"Let's Connect"</h3>
                            <p class="text-gray-300 text-lg leading-relaxed mb-8">
                                "Whether you have a project in mind, want to collaborate on open source, or just want to say hello, I'd love to hear from you."
                            </p>
                        </div>
                        <div class="space-y-4">
                            {profile
                                .contact_methods
                                .iter()
                                .enumerate()
                                .map(|(i, method)| {
                                    view! {
                                        <a
                                            href=method.href.clone()
                                            class=move || reveal_class(
                                                in_view.get(),
                                                Entrance::FromLeft,
                                                "flex items-center space-x-4 p-4 bg-gray-800/50 backdrop-blur-lg rounded-xl border border-gray-700 hover:border-gray-600 hover:translate-x-2 group",
                                            )
                                            style=entrance_style(METHODS.delay_ms(i))
                                        >
                                            <div class=format!(
                                                "p-3 rounded-lg bg-gradient-to-r {} group-hover:scale-110 transition-transform",
                                                method.color,
                                            )>
                                                <IconGlyph icon=method.icon class="text-white text-xl" />
                                            </div>
                                            <div>
                                                <h4 class="text-white font-semibold">{method.label.clone()}</h4>
                                                <p class="text-gray-400">{method.value.clone()}</p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div>
                            <h4 class="text-white font-semibold mb-4">"Follow Me"</h4>
                            <div class="flex space-x-4">
                                {profile
                                    .socials
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label.clone()
                                                title=social.label.clone()
                                                class="p-3 bg-gray-800 rounded-lg text-gray-400 hover:text-white hover:bg-gray-700 hover:scale-110 transition-all"
                                            >
                                                <IconGlyph icon=social.icon class="text-xl" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div
                        class=move || reveal_class(
                            in_view.get(),
                            Entrance::FromRight,
                            "bg-gray-800/50 backdrop-blur-lg rounded-xl p-8 border border-gray-700",
                        )
                        style=entrance_style(400)
                    >
                        <form on:submit=on_submit class="space-y-6">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <FormField form field=Field::Name />
                                <FormField form field=Field::Email />
                            </div>
                            <FormField form field=Field::Subject />
                            <FormField form field=Field::Message />
                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white py-4 rounded-lg font-semibold hover:shadow-lg hover:shadow-blue-500/25 hover:scale-[1.02] active:scale-[0.98] transition-all disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center space-x-2"
                            >
                                <Show
                                    when=submitting
                                    fallback=|| view! { <span>"➤"</span><span>"Send Message"</span> }
                                >
                                    <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                    <span>"Sending..."</span>
                                </Show>
                            </button>
                        </form>
                    </div>
                </div>
                <div
                    class=move || reveal_class(
                        in_view.get(),
                        Entrance::Fade,
                        "mt-20 pt-8 border-t border-gray-700 text-center",
                    )
                    style=entrance_style(1000)
                >
                    <p class="text-gray-400">
                        {format!(
                            "© {year}{}. Built with Rust, Leptos, and Tailwind CSS.",
                            profile.name,
                        )}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());

    view! {
        <div>
            <label for=field.id() class="block text-gray-300 font-medium mb-2">
                {field.label()}
            </label>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                id=field.id()
                                name=field.id()
                                required=true
                                rows=6
                                prop:value=value
                                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                                placeholder=field.placeholder()
                                class=format!("{FIELD_CLASS} resize-none")
                            ></textarea>
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <input
                                type=field.input_type()
                                id=field.id()
                                name=field.id()
                                required=true
                                prop:value=value
                                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                                placeholder=field.placeholder()
                                class=FIELD_CLASS
                            />
                        },
                    )
                }
            }}
        </div>
    }
}
