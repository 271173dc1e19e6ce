use leptos::{html, prelude::*};

use super::reveal::{entrance_style, reveal_class, use_reveal, SectionHeader};
use crate::content::{format_count, portfolio, Contribution};
use crate::reveal::{Entrance, Stagger};

const TILES: Stagger = Stagger::new(300, 100);
const CARDS: Stagger = Stagger::new(500, 200);

#[component]
pub fn OpenSource() -> impl IntoView {
    let open_source = &portfolio().open_source;
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);

    view! {
        <section id="opensource" class="py-20 px-4 bg-gray-900/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="Open Source Contributions"
                    subtitle="Passionate about giving back to the community through meaningful contributions to open source projects"
                    gradient="from-purple-400 to-pink-400"
                />
                <div
                    class=move || reveal_class(
                        in_view.get(),
                        Entrance::RiseFar,
                        "grid grid-cols-2 md:grid-cols-4 gap-6 mb-16",
                    )
                    style=entrance_style(200)
                >
                    {open_source
                        .overall
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <div
                                    class=move || reveal_class(
                                        in_view.get(),
                                        Entrance::Pop,
                                        "bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700 text-center hover:border-gray-600 hover:scale-105",
                                    )
                                    style=entrance_style(TILES.delay_ms(i))
                                >
                                    <div class=format!(
                                        "text-2xl font-bold mx-auto mb-3 {}",
                                        stat.color,
                                    )>{stat.glyph.clone()}</div>
                                    <div class="text-2xl font-bold text-white mb-1">{stat.value.clone()}</div>
                                    <div class="text-gray-400 text-sm">{stat.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="space-y-8">
                    {open_source
                        .contributions
                        .iter()
                        .enumerate()
                        .map(|(index, contribution)| {
                            view! { <ContributionCard contribution index revealed=in_view /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContributionCard(
    contribution: &'static Contribution,
    index: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    let stats = &contribution.stats;
    let stat_rows = [
        ("⇄", "Pull Requests", format_count(stats.prs)),
        ("</>", "Commits", format_count(stats.commits)),
        ("±", "Lines Changed", stats.lines_changed.clone()),
        ("★", "Stars Earned", format_count(stats.stars)),
    ];

    view! {
        <div
            class=move || reveal_class(
                revealed.get(),
                Entrance::alternating(index),
                "bg-gray-800/50 backdrop-blur-lg rounded-xl p-8 border border-gray-700 hover:border-gray-600 hover:scale-[1.02]",
            )
            style=entrance_style(CARDS.delay_ms(index))
        >
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <div class="flex items-start justify-between mb-4">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-2">
                                {contribution.project.clone()}
                            </h3>
                            <p class="text-gray-400 mb-3">{contribution.description.clone()}</p>
                            <span class=format!(
                                "inline-block px-3 py-1 rounded-full text-sm font-semibold bg-gradient-to-r {} text-white",
                                contribution.color,
                            )>{contribution.role.clone()}</span>
                        </div>
                        <a
                            href=contribution.link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Repository"
                            class="text-gray-400 hover:text-white hover:scale-110 transition-all p-2 rounded-lg hover:bg-gray-700 text-2xl"
                        >
                            <i class="devicon-github-original"></i>
                        </a>
                    </div>
                    <ul class="space-y-2 mb-6">
                        {contribution
                            .contributions
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="text-gray-300 flex items-start">
                                        <span class="text-blue-400 mr-3 mt-1">"•"</span>
                                        {item.clone()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="flex flex-wrap gap-2">
                        {contribution
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-700 text-gray-300 rounded-full text-sm border border-gray-600">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="space-y-4">
                    <h4 class="text-lg font-semibold text-gray-300 mb-4">"Contribution Stats"</h4>
                    {stat_rows
                        .into_iter()
                        .map(|(glyph, label, value)| {
                            view! {
                                <div class="flex items-center justify-between p-3 bg-gray-700/50 rounded-lg">
                                    <div class="flex items-center space-x-2">
                                        <span class="text-gray-400 text-sm">{glyph}</span>
                                        <span class="text-gray-300 text-sm">{label}</span>
                                    </div>
                                    <span class="text-white font-semibold">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
