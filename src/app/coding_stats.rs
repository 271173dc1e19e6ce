use leptos::{html, prelude::*};

use super::reveal::{entrance_style, reveal_class, use_reveal, SectionHeader};
use crate::content::portfolio;
use crate::reveal::Entrance;

#[component]
pub fn CodingStats() -> impl IntoView {
    let widgets = &portfolio().widgets;
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);

    view! {
        <section id="stats" class="py-20 px-4 bg-gray-900/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="Coding Statistics"
                    subtitle="Live data from various competitive programming platforms showcasing consistent growth and achievements"
                    gradient="from-green-400 to-blue-400"
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div
                        class=move || reveal_class(
                            in_view.get(),
                            Entrance::FromLeft,
                            "bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700 relative",
                        )
                        style=entrance_style(500)
                    >
                        <h3 class="text-xl font-bold text-white mb-6 flex items-center">
                            <span class="mr-2 text-purple-400">"</>"</span>
                            "Competitive Programming Profile"
                        </h3>
                        <div class="relative h-[500px]">
                            <iframe
                                src=widgets.profile_card.url.clone()
                                title=widgets.profile_card.title.clone()
                                class="w-full h-full rounded-lg border-0"
                            ></iframe>
                            <div class="scroll-hint absolute bottom-6 right-6 bg-gradient-to-r from-purple-600/80 to-blue-600/80 backdrop-blur-md rounded-xl px-4 py-3 pointer-events-none shadow-lg border border-purple-400/30">
                                <div class="flex items-center space-x-3 text-white">
                                    <span class="text-sm font-medium animate-pulse">
                                        "Scroll inside to explore"
                                    </span>
                                    <span class="animate-bounce">"⌄"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div
                        class=move || reveal_class(
                            in_view.get(),
                            Entrance::FromRight,
                            "bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700",
                        )
                        style=entrance_style(700)
                    >
                        <h3 class="text-xl font-bold text-white mb-6 flex items-center">
                            <span class="mr-2 text-green-400">"📈"</span>
                            "GitHub Statistics"
                        </h3>
                        <div class="space-y-4">
                            {widgets
                                .github
                                .iter()
                                .map(|w| {
                                    view! {
                                        <img src=w.url.clone() alt=w.title.clone() class="w-full rounded-lg" />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div
                    class=move || reveal_class(
                        in_view.get(),
                        Entrance::RiseFar,
                        "mt-8 bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700",
                    )
                    style=entrance_style(1300)
                >
                    <h3 class="text-xl font-bold text-white mb-6 flex items-center">
                        <span class="mr-2 text-purple-400">"📈"</span>
                        "Open Source Contributions & Activity"
                    </h3>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        {widgets
                            .activity
                            .iter()
                            .map(|w| {
                                view! {
                                    <div>
                                        <h4 class="text-lg font-semibold text-white mb-4">{w.title.clone()}</h4>
                                        <img src=w.url.clone() alt=w.title.clone() class="w-full rounded-lg" />
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
