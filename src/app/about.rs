use leptos::{html, prelude::*};

use super::reveal::{entrance_style, reveal_class, use_reveal, SectionHeader};
use crate::content::portfolio;
use crate::reveal::{Entrance, Stagger};

const ACHIEVEMENTS: Stagger = Stagger::new(600, 100);

#[component]
pub fn About() -> impl IntoView {
    let profile = &portfolio().profile;
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);

    view! {
        <section id="about" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="About Me"
                    subtitle=profile.summary.clone()
                    gradient="from-blue-400 to-purple-400"
                />
                <div class="flex flex-col lg:flex-row gap-12 min-h-[600px]">
                    <div
                        class=move || reveal_class(in_view.get(), Entrance::FromLeft, "lg:w-1/2 space-y-8")
                        style=entrance_style(200)
                    >
                        <div class="space-y-6">
                            <div class="prose prose-invert max-w-none space-y-4">
                                {profile
                                    .about
                                    .iter()
                                    .map(|p| {
                                        view! {
                                            <p class="text-lg text-gray-300 leading-relaxed">
                                                {p.clone()}
                                            </p>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex flex-wrap gap-6">
                                <div class="flex items-center space-x-2 text-gray-400">
                                    <span class="text-blue-400">"📍"</span>
                                    <span>{profile.location.clone()}</span>
                                </div>
                                <div class="flex items-center space-x-2 text-gray-400">
                                    <span class="text-green-400">"📅"</span>
                                    <span>{profile.availability.clone()}</span>
                                </div>
                            </div>
                        </div>
                        <div class="bg-gray-800/30 rounded-lg p-4 border border-gray-700/50">
                            <div class="flex items-center justify-between">
                                <div>
                                    <h4 class="text-white font-medium mb-1">
                                        "Interested in my full background?"
                                    </h4>
                                    <p class="text-gray-400 text-sm">
                                        "Download my complete resume with detailed experience and projects"
                                    </p>
                                </div>
                                <a
                                    href=profile.resume.href.clone()
                                    download=profile.resume.file_name.clone()
                                    class="bg-gradient-to-r from-blue-500 to-purple-500 text-white px-6 py-2.5 rounded-lg font-medium flex items-center space-x-2 hover:shadow-lg hover:shadow-blue-500/25 hover:scale-105 transition-all flex-shrink-0 ml-4"
                                >
                                    <span>"⬇"</span>
                                    <span>"Download"</span>
                                </a>
                            </div>
                        </div>
                    </div>
                    <div
                        class=move || reveal_class(
                            in_view.get(),
                            Entrance::FromRight,
                            "lg:w-1/2 flex flex-col space-y-8",
                        )
                        style=entrance_style(400)
                    >
                        <div class="bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700 flex-shrink-0">
                            <h3 class="text-2xl font-bold mb-4 text-blue-400">"Education"</h3>
                            <div class="space-y-4 divide-y divide-gray-700/50">
                                {profile
                                    .education
                                    .iter()
                                    .map(|e| {
                                        view! {
                                            <div class="pt-4 first:pt-0">
                                                <h4 class="text-lg font-semibold text-white">
                                                    {e.degree.clone()}
                                                </h4>
                                                <p class="text-gray-400">{e.field.clone()}</p>
                                                <p class="text-gray-500">{e.school.clone()}</p>
                                                <p class="text-sm text-green-400 mt-1">{e.grade.clone()}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="flex-1">
                            <h3 class="text-2xl font-bold text-purple-400 mb-4">"Key Achievements"</h3>
                            <div class="grid grid-cols-1 gap-3">
                                {profile
                                    .achievements
                                    .iter()
                                    .enumerate()
                                    .map(|(i, a)| {
                                        view! {
                                            <div
                                                class=move || reveal_class(
                                                    in_view.get(),
                                                    Entrance::Rise,
                                                    "bg-gray-800/50 backdrop-blur-lg rounded-xl p-4 border border-gray-700 hover:border-gray-600 hover:scale-[1.02]",
                                                )
                                                style=entrance_style(ACHIEVEMENTS.delay_ms(i))
                                            >
                                                <div class="flex items-center space-x-4">
                                                    <div class=format!(
                                                        "p-3 rounded-lg bg-gradient-to-r {} flex-shrink-0 text-white",
                                                        a.color,
                                                    )>"🏆"</div>
                                                    <div class="min-w-0 flex-1">
                                                        <h4 class="text-lg font-semibold text-white leading-tight">
                                                            {a.title.clone()}
                                                        </h4>
                                                        <p class="text-gray-400 text-sm">{a.description.clone()}</p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
