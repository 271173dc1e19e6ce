use leptos::{html, prelude::*};

use super::reveal::{reveal_class, use_reveal, SectionHeader};
use crate::content::{portfolio, ExperienceRecord};
use crate::reveal::{transition_style, Entrance, Stagger};

const ENTRIES: Stagger = Stagger::new(0, 150);

#[component]
pub fn Experience() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);

    view! {
        <section id="experience" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="Experience"
                    subtitle="My professional journey through internships, freelance work, and open-source contributions"
                    gradient="from-orange-400 to-red-400"
                />
                <div class="relative">
                    <div class="absolute left-6 md:left-1/2 md:-translate-x-px top-0 bottom-0 w-0.5 bg-gray-600"></div>
                    <div class="space-y-8">
                        {portfolio()
                            .experience
                            .iter()
                            .enumerate()
                            .map(|(index, record)| {
                                view! { <TimelineEntry record index revealed=in_view /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(
    record: &'static ExperienceRecord,
    index: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    let delay = ENTRIES.delay_ms(index);
    let even = index % 2 == 0;
    let row = if even { "md:flex-row" } else { "md:flex-row-reverse" };
    let connector = if even {
        "left-9 md:left-1/2 md:translate-x-1"
    } else {
        "left-9 md:right-1/2 md:left-auto md:-translate-x-1"
    };
    let content_pad = if even { "md:pr-6" } else { "md:pl-6" };

    view! {
        <div
            class=move || reveal_class(
                revealed.get(),
                Entrance::Rise,
                &format!("relative flex flex-col {row} items-start"),
            )
            style=transition_style(500, delay)
        >
            <div
                class=move || {
                    let scale = if revealed.get() { "scale-100" } else { "scale-0" };
                    format!(
                        "absolute left-6 md:left-1/2 -translate-x-1/2 w-3 h-3 bg-white rounded-full border-2 border-gray-600 z-10 transition-transform {scale}",
                    )
                }
                style=transition_style(300, delay + 300)
            ></div>
            <div class=format!("absolute top-1.5 w-6 h-0.5 bg-gray-600 z-[5] {connector}")></div>
            <div class=format!("w-full md:w-5/12 ml-12 md:ml-0 {content_pad}")>
                <div class="bg-gray-800/30 backdrop-blur-sm rounded-lg p-5 border border-gray-700/50 hover:bg-gray-800/50 hover:-translate-y-0.5 transition-all duration-300">
                    <div class="flex items-start justify-between mb-3">
                        <div>
                            <h3 class="text-lg font-semibold text-white mb-1">{record.title.clone()}</h3>
                            <div class="flex items-center space-x-2 text-gray-400 mb-2">
                                <span>"💼"</span>
                                <span class="text-sm font-medium">{record.company.clone()}</span>
                            </div>
                            <div class="flex flex-wrap gap-3 text-xs text-gray-500">
                                <div class="flex items-center space-x-1">
                                    <span>"📅"</span>
                                    <span>{record.period.clone()}</span>
                                </div>
                                <div class="flex items-center space-x-1">
                                    <span>"📍"</span>
                                    <span>{record.location.clone()}</span>
                                </div>
                            </div>
                        </div>
                        <span class=format!(
                            "px-2 py-1 rounded-md text-xs font-medium text-white bg-gradient-to-r {}",
                            record.color,
                        )>{record.kind.clone()}</span>
                    </div>
                    <ul class="space-y-2 mb-4">
                        {record
                            .description
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="text-gray-300 text-base flex items-start leading-relaxed">
                                        <span class="text-gray-500 mr-2 mt-1.5 text-sm">"•"</span>
                                        {item.clone()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="flex flex-wrap gap-1.5">
                        {record
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2 py-0.5 bg-gray-700/50 text-gray-400 rounded text-xs border border-gray-600/30">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="hidden md:block w-2/12"></div>
        </div>
    }
}
