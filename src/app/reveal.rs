use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{transition_style, Entrance, RevealLatch, DEFAULT_THRESHOLD, ENTRANCE_MS};

/// Watches `target` until it first crosses the visibility threshold.
///
/// The observer is stopped as soon as the latch flips, and leptos-use
/// disconnects it on cleanup if the section unmounts first.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let visible = entries
                .iter()
                .filter(|entry| entry.is_intersecting())
                .map(|entry| entry.intersection_ratio())
                .fold(0.0, f64::max);
            if visible > 0.0 {
                latch.maybe_update(|l| {
                    let flipped = l.observe(visible);
                    if flipped {
                        log::debug!("section revealed at {visible:.2} visible");
                    }
                    flipped
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![DEFAULT_THRESHOLD]),
    );

    let revealed = Signal::derive(move || latch.with(RevealLatch::is_revealed));
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });
    revealed
}

/// Class list for an element that animates in once `revealed` is set.
pub fn reveal_class(revealed: bool, entrance: Entrance, extra: &str) -> String {
    format!(
        "transition-all ease-out {} {extra}",
        entrance.classes(revealed)
    )
}

/// Standard entrance timing, delayed by `delay_ms`.
pub fn entrance_style(delay_ms: u32) -> String {
    transition_style(ENTRANCE_MS, delay_ms)
}

/// Section title block; doubles as the element whose visibility reveals the section.
#[component]
pub fn SectionHeader(
    target: NodeRef<html::Div>,
    revealed: Signal<bool>,
    title: &'static str,
    #[prop(into)] subtitle: String,
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <div
            node_ref=target
            class=move || reveal_class(revealed.get(), Entrance::Rise, "text-center mb-16")
            style=entrance_style(0)
        >
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                <span class=format!(
                    "bg-gradient-to-r {gradient} bg-clip-text text-transparent",
                )>{title}</span>
            </h2>
            <p class="text-xl text-gray-400 max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}
