use leptos::prelude::*;

use crate::content::portfolio;

const SECTIONS: [(&str, &str); 8] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("opensource", "Open Source"),
    ("projects", "Projects"),
    ("stats", "Stats"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let name = &portfolio().profile.name;

    let links = move |class: &'static str| {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                view! {
                    <a href=format!("#{id}") class=class on:click=move |_| set_menu_open(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-gray-900/80 backdrop-blur-md border-b border-gray-800">
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent"
                >
                    {name.clone()}
                </a>
                <div class="hidden md:flex space-x-6">
                    {links("text-gray-300 hover:text-white transition-colors")}
                </div>
                <button
                    class="md:hidden text-gray-300 hover:text-white text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col px-4 pb-4 space-y-3 bg-gray-900/95">
                    {links("text-gray-300 hover:text-white")}
                </div>
            </Show>
        </nav>
    }
}
