use leptos::{html, prelude::*};

use super::reveal::{entrance_style, reveal_class, use_reveal, SectionHeader};
use crate::content::{portfolio, Skill};
use crate::reveal::{transition_style, Entrance, Stagger};

const CATEGORIES: Stagger = Stagger::new(0, 200);
const SKILL_ROWS: Stagger = Stagger::new(300, 100);
const OTHER_TECH: Stagger = Stagger::new(900, 50);
const BAR_FILL_MS: u32 = 1500;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &portfolio().skills;
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);

    view! {
        <section id="skills" class="py-20 px-4 bg-gray-900/50">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="Skills & Technologies"
                    subtitle="A comprehensive toolkit built through years of hands-on experience and continuous learning"
                    gradient="from-green-400 to-blue-400"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {skills
                        .categories
                        .iter()
                        .enumerate()
                        .map(|(ci, category)| {
                            let base = CATEGORIES.delay_ms(ci);
                            view! {
                                <div
                                    class=move || reveal_class(
                                        in_view.get(),
                                        Entrance::RiseFar,
                                        "bg-gray-800/50 backdrop-blur-lg rounded-xl p-6 border border-gray-700 hover:border-gray-600 hover:scale-[1.02]",
                                    )
                                    style=entrance_style(base)
                                >
                                    <h3 class="text-xl font-bold mb-6 text-center">
                                        <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                                            {category.title.clone()}
                                        </span>
                                    </h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .enumerate()
                                            .map(|(si, skill)| {
                                                let delay_ms = base + SKILL_ROWS.delay_ms(si);
                                                view! { <SkillBar skill revealed=in_view delay_ms /> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div
                    class=move || reveal_class(in_view.get(), Entrance::RiseFar, "mt-16 text-center")
                    style=entrance_style(800)
                >
                    <h3 class="text-2xl font-bold mb-8 text-gray-300">"Other Technologies"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {skills
                            .other
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <span
                                        class=move || reveal_class(
                                            in_view.get(),
                                            Entrance::Pop,
                                            "px-4 py-2 bg-gray-800 border border-gray-600 rounded-full text-gray-300 hover:border-gray-500 hover:text-white cursor-default",
                                        )
                                        style=transition_style(500, OTHER_TECH.delay_ms(i))
                                    >
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill, revealed: Signal<bool>, delay_ms: u32) -> impl IntoView {
    let level = skill.level;
    let bar_style = move || {
        let width = if revealed.get() { level } else { 0 };
        format!(
            "width: {width}%; {}",
            transition_style(BAR_FILL_MS, delay_ms + 200)
        )
    };

    view! {
        <div
            class=move || reveal_class(revealed.get(), Entrance::Nudge, "")
            style=entrance_style(delay_ms)
        >
            <div class="flex justify-between mb-2">
                <span class="text-gray-300 font-medium">{skill.name.clone()}</span>
                <span class="text-gray-400 text-sm">{format!("{level}%")}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-2.5">
                <div
                    class=format!(
                        "h-2.5 rounded-full bg-gradient-to-r {} transition-[width] ease-out",
                        skill.color,
                    )
                    style=bar_style
                ></div>
            </div>
        </div>
    }
}
