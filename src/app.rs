mod about;
mod coding_stats;
mod contact;
mod experience;
mod hero;
mod navbar;
mod open_source;
mod projects;
mod reveal;
mod skills;

use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, Icon};
use about::About;
use coding_stats::CodingStats;
use contact::Contact;
use experience::Experience;
use hero::Hero;
use navbar::Navbar;
use open_source::OpenSource;
use projects::Projects;
use skills::Skills;

/// Startup delay standing in for an initial data fetch.
const LOADING_DELAY: Duration = Duration::from_millis(2000);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = portfolio().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let (is_loading, set_is_loading) = signal(true);

    // effects only run in the browser, so the server always renders the loader
    Effect::new(move |_| {
        set_timeout(
            move || {
                log::debug!("portfolio loaded");
                set_is_loading(false);
            },
            LOADING_DELAY,
        );
    });

    view! {
        <Title text="Portfolio" />
        <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
            <div class="min-h-screen bg-gray-900 text-white relative overflow-x-hidden">
                <Navbar />
                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Experience />
                    <OpenSource />
                    <Projects />
                    <CodingStats />
                    <Contact />
                </main>
            </div>
        </Show>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-blue-900 to-purple-900 flex items-center justify-center">
            <div class="text-center fade-in-scale">
                <div class="w-16 h-16 border-4 border-blue-500 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-white text-xl font-semibold">"Loading Portfolio..."</p>
            </div>
        </div>
    }
}

/// Brand icons come from devicon, the rest are plain glyphs.
#[component]
fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon.devicon() {
        Some(devicon) => Either::Left(view! { <i class=format!("{devicon} {class}")></i> }),
        None => Either::Right(view! { <span class=class>{icon.glyph()}</span> }),
    }
}
