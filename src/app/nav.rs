use leptos::{either::Either, prelude::*};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::section::Section;

fn scroll_to_section(section: Section, set_menu_open: WriteSignal<bool>) {
    let Some(el) = document().get_element_by_id(section.anchor()) else {
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    set_menu_open.set(false);
}

#[component]
pub fn NavBar(brand: String) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button class=class on:click=move |_| scroll_to_section(section, set_menu_open)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 w-full bg-white shadow-sm z-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-xl font-bold text-gray-800">{brand}</div>
                    <div class="hidden md:flex space-x-8">
                        {links("text-gray-600 hover:text-gray-900 transition")}
                    </div>
                    <button
                        class="md:hidden p-2 text-2xl"
                        aria-label="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class="md:hidden bg-white border-t">
                                <div class="px-4 py-3 space-y-3">
                                    {links("block w-full text-left text-gray-600 hover:text-gray-900")}
                                </div>
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </nav>
    }
}
