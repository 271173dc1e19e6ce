use std::time::Duration;

use leptos::{either::Either, html, prelude::*};

use super::reveal::{use_reveal, SectionHeader};
use crate::carousel::{Carousel, Slide};
use crate::content::{portfolio, ProjectRecord};

/// Length of one slide animation; keep in sync with the keyframes in input.css.
const SLIDE_DURATION: Duration = Duration::from_millis(500);

type ProjectCarousel = Carousel<&'static ProjectRecord>;

#[component]
pub fn Projects() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let in_view = use_reveal(header_ref);
    let carousel = ProjectCarousel::new(portfolio().projects.iter().collect());

    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    target=header_ref
                    revealed=in_view
                    title="Featured Projects"
                    subtitle="A showcase of my most impactful projects spanning machine learning, web development, and system design"
                    gradient="from-cyan-400 to-blue-400"
                />
                {match carousel {
                    Ok(carousel) => {
                        Either::Left(view! { <ProjectSlider carousel=RwSignal::new(carousel) /> })
                    }
                    Err(err) => {
                        log::error!("project carousel unavailable: {err}");
                        Either::Right(())
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectSlider(carousel: RwSignal<ProjectCarousel>) -> impl IntoView {
    // the incoming slide only re-renders when a new transition starts, not when one settles
    let active = Memo::new(move |_| carousel.with(|c| (c.current_index(), c.generation())));
    let outgoing = Memo::new(move |_| carousel.with(|c| c.in_flight()));
    let titles: Vec<String> =
        carousel.with_untracked(|c| c.items().iter().map(|p| p.title.clone()).collect());

    let play = move |slide: Slide| {
        log::debug!(
            "project {} -> {} ({:?}, generation {})",
            slide.from,
            slide.to,
            slide.direction,
            slide.generation
        );
        set_timeout(
            move || carousel.maybe_update(|c| c.settle(slide.generation)),
            SLIDE_DURATION,
        );
    };
    let next = move |_| {
        if let Some(slide) = carousel.try_update(|c| c.next()) {
            play(slide);
        }
    };
    let previous = move |_| {
        if let Some(slide) = carousel.try_update(|c| c.previous()) {
            play(slide);
        }
    };
    let jump = move |index: usize| match carousel.try_update(|c| c.jump_to(index)) {
        Some(Ok(slide)) => play(slide),
        Some(Err(err)) => log::warn!("ignoring carousel jump: {err}"),
        None => {}
    };

    view! {
        <div class="relative">
            <div class="relative overflow-hidden">
                {move || {
                    let (index, _) = active.get();
                    let (record, enter) = carousel
                        .with_untracked(|c| {
                            (
                                *c.current(),
                                c.in_flight().map(|s| s.direction.enter_class()).unwrap_or(""),
                            )
                        });
                    view! { <ProjectSlide record index animation=enter /> }
                }}
                {move || {
                    outgoing
                        .get()
                        .filter(|slide| slide.from != slide.to)
                        .and_then(|slide| {
                            let record = carousel.with_untracked(|c| c.get(slide.from).copied())?;
                            Some(
                                view! {
                                    <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                                        <ProjectSlide
                                            record
                                            index=slide.from
                                            animation=slide.direction.exit_class()
                                        />
                                    </div>
                                },
                            )
                        })
                }}
            </div>
            <button
                on:click=previous
                class="absolute left-4 top-1/2 -translate-y-1/2 bg-gray-800/80 text-white p-3 rounded-full hover:bg-gray-700 transition-all z-10 text-xl leading-none"
                aria-label="Previous project"
                title="Previous project"
            >
                "‹"
            </button>
            <button
                on:click=next
                class="absolute right-4 top-1/2 -translate-y-1/2 bg-gray-800/80 text-white p-3 rounded-full hover:bg-gray-700 transition-all z-10 text-xl leading-none"
                aria-label="Next project"
                title="Next project"
            >
                "›"
            </button>
        </div>
        <div class="flex justify-center space-x-2 mt-8">
            {titles
                .into_iter()
                .enumerate()
                .map(|(index, title)| {
                    view! {
                        <button
                            on:click=move |_| jump(index)
                            class=move || {
                                if active.get().0 == index {
                                    "w-3 h-3 rounded-full transition-all bg-blue-500"
                                } else {
                                    "w-3 h-3 rounded-full transition-all bg-gray-600"
                                }
                            }
                            aria-label=format!("Go to project {}", index + 1)
                            title=title
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectSlide(
    record: &'static ProjectRecord,
    index: usize,
    animation: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex flex-col lg:flex-row gap-8 min-h-[600px] {animation}")>
            <div class="lg:w-2/5 flex flex-col">
                <div class="relative overflow-hidden rounded-xl flex-1 min-h-[400px] lg:min-h-full">
                    <img
                        src=record.image.clone()
                        alt=record.title.clone()
                        class="w-full h-full object-cover hover:scale-105 transition-transform duration-300"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-gray-900/80 to-transparent"></div>
                    <div class="absolute bottom-4 left-4 right-4">
                        <span class=format!(
                            "inline-block px-3 py-1 rounded-full text-sm font-semibold bg-gradient-to-r {} text-white",
                            record.color,
                        )>{record.category.clone()}</span>
                    </div>
                    <div class="absolute top-4 right-4 bg-black/60 backdrop-blur-sm rounded-full w-12 h-12 flex items-center justify-center">
                        <span class="text-white font-bold text-lg">{index + 1}</span>
                    </div>
                </div>
            </div>
            <div class="lg:w-3/5 flex flex-col justify-between space-y-6">
                <div class="space-y-6">
                    <div>
                        <h3 class="text-3xl lg:text-4xl font-bold text-white mb-2 leading-tight">
                            {record.title.clone()}
                        </h3>
                        <div class="flex items-center space-x-2 text-gray-400 mb-4">
                            <span>"📅"</span>
                            <span>{record.timeline.clone()}</span>
                        </div>
                        <p class="text-gray-300 text-lg leading-relaxed">
                            {record.long_description.clone()}
                        </p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-blue-400 mb-3">"Key Achievements"</h4>
                        <ul class="grid grid-cols-1 md:grid-cols-2 gap-2">
                            {record
                                .highlights
                                .iter()
                                .map(|highlight| {
                                    view! {
                                        <li class="text-gray-300 flex items-start">
                                            <span class="text-green-400 mr-3 mt-1 flex-shrink-0">"✓"</span>
                                            <span class="text-sm leading-relaxed">{highlight.clone()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold text-purple-400 mb-3">"Technologies Used"</h4>
                        <div class="flex flex-wrap gap-2">
                            {record
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 bg-gray-700/50 text-gray-300 rounded-full text-sm border border-gray-600/50 backdrop-blur-sm hover:bg-gray-600/50 transition-all">
                                            {tech.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 pt-4 border-t border-gray-700/50">
                    <a
                        href=record.github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center justify-center space-x-2 bg-gray-800 text-white px-6 py-3 rounded-full font-semibold hover:bg-gray-700 hover:scale-[1.02] active:scale-[0.98] transition-all flex-1"
                    >
                        <i class="devicon-github-original text-xl"></i>
                        <span>"View Code"</span>
                    </a>
                    <a
                        href=record.live_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=format!(
                            "flex items-center justify-center space-x-2 bg-gradient-to-r {} text-white px-6 py-3 rounded-full font-semibold hover:shadow-lg hover:scale-105 active:scale-95 transition-all",
                            record.color,
                        )
                    >
                        <span>"↗"</span>
                        <span>"Live Demo"</span>
                    </a>
                </div>
            </div>
        </div>
    }
}
