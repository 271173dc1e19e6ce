use std::time::Duration;

use leptos::prelude::*;

use super::reveal::{entrance_style, reveal_class};
use super::IconGlyph;
use crate::content::{format_count, portfolio};
use crate::reveal::{Entrance, Stagger};

/// Delay of the simulated stats fetch. No request is made.
const STATS_DELAY: Duration = Duration::from_millis(1000);
const CHILDREN: Stagger = Stagger::new(300, 200);

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;
    let (mounted, set_mounted) = signal(false);
    let (stats, set_stats) = signal(profile.stats.pending());

    // the hero is on screen immediately, so it animates on mount rather than on scroll
    Effect::new(move |_| {
        request_animation_frame(move || set_mounted(true));
        set_timeout(move || set_stats(profile.stats), STATS_DELAY);
    });

    let item = move |index: usize, extra: &'static str| {
        (
            move || reveal_class(mounted.get(), Entrance::Rise, extra),
            entrance_style(CHILDREN.delay_ms(index)),
        )
    };

    let (avatar_class, avatar_style) = item(0, "mb-8");
    let (name_class, name_style) = item(1, "text-5xl md:text-7xl font-bold mb-4");
    let (headline_class, headline_style) =
        item(2, "text-xl md:text-2xl text-gray-100 mb-8 max-w-3xl mx-auto font-medium");
    let (actions_class, actions_style) = item(3, "flex flex-wrap justify-center gap-4 mb-12");
    let (links_class, links_style) = item(4, "flex justify-center space-x-6 mb-16");
    let (stats_class, stats_style) =
        item(5, "grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto");

    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4 pt-16">
            <div class="max-w-6xl mx-auto text-center">
                <div class=avatar_class style=avatar_style>
                    <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-r from-blue-500 to-purple-500 p-1">
                        <div class="w-full h-full rounded-full bg-gray-900 flex items-center justify-center">
                            <img
                                src=profile.avatar.clone()
                                alt="Developer"
                                class="w-28 h-28 rounded-full object-cover"
                            />
                        </div>
                    </div>
                </div>
                <h1 class=name_class style=name_style>
                    <span class="bg-gradient-to-r from-white via-gray-100 to-blue-100 bg-clip-text text-transparent">
                        {profile.name.clone()}
                    </span>
                </h1>
                <p class=headline_class style=headline_style>
                    {profile.headline.clone()}
                    <br />
                    <span class="text-lg text-gray-200 font-normal">{profile.tagline.clone()}</span>
                </p>
                <div class=actions_class style=actions_style>
                    <a
                        href=profile.resume.href.clone()
                        download=profile.resume.file_name.clone()
                        class="bg-gradient-to-r from-blue-500 to-purple-500 text-white px-8 py-3 rounded-full font-semibold flex items-center space-x-2 hover:shadow-lg hover:shadow-blue-500/25 hover:scale-105 transition-all"
                    >
                        <span>"⬇"</span>
                        <span>"Download Resume"</span>
                    </a>
                    <a
                        href="#contact"
                        class="border border-gray-300 text-white px-8 py-3 rounded-full font-semibold hover:bg-white hover:text-gray-900 hover:scale-105 transition-all"
                    >
                        "Get In Touch"
                    </a>
                </div>
                <div class=links_class style=links_style>
                    {profile
                        .hero_links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    aria-label=link.label.clone()
                                    class="text-gray-200 hover:text-white hover:scale-110 hover:-translate-y-0.5 transition-all p-3 rounded-full bg-gray-800/50 hover:bg-gray-700/50 backdrop-blur-sm"
                                >
                                    <IconGlyph icon=link.icon class="text-2xl" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=stats_class style=stats_style>
                    <StatCard
                        value=Signal::derive(move || stats.get().github_contributions)
                        label="Total Commits"
                        suffix=" this year"
                        color="from-green-400 to-green-600"
                        glyph="⎇"
                    />
                    <StatCard
                        value=Signal::derive(move || stats.get().problems_solved)
                        label="Problems Solved"
                        suffix=" across platforms"
                        color="from-blue-400 to-blue-600"
                        glyph="</>"
                    />
                    <StatCard
                        value=Signal::derive(move || stats.get().merged_prs)
                        label="Open Source PRs"
                        suffix=" merged"
                        color="from-purple-400 to-purple-600"
                        glyph="⇄"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(
    value: Signal<u32>,
    label: &'static str,
    suffix: &'static str,
    color: &'static str,
    glyph: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700 hover:border-gray-600 hover:scale-105 hover:-translate-y-1 transition-all">
            <div class=format!(
                "inline-flex p-3 rounded-lg bg-gradient-to-r {color} mb-4 text-white font-bold",
            )>{glyph}</div>
            <div class="text-3xl font-bold text-white mb-2">
                {move || format_count(value.get())}
            </div>
            <div class="text-gray-300">
                {label} <span class="text-sm block text-gray-400">{suffix}</span>
            </div>
        </div>
    }
}

