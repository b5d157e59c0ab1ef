use leptos::prelude::*;

use crate::content::DocumentReference;
use crate::layout::Section;

fn nav_links(on_pick: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    Section::NAV
        .into_iter()
        .map(|section| {
            view! {
                <a href=section.anchor() class="hover:underline" on:click=move |_| on_pick()>
                    {section.label()}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Header(name: &'static str, cv: &'static DocumentReference) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = move || set_menu_open.set(false);

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40">
            <div class="max-w-5xl mx-auto px-4 py-4 flex items-center justify-between">
                <a href=Section::Home.anchor() class="font-semibold text-xl">
                    {name}
                </a>
                <nav class="hidden md:flex gap-6 text-sm">
                    {nav_links(close_menu)}
                    <a href=cv.as_str() download=cv.file_name() class="px-3 py-1 border rounded">
                        "Download CV"
                    </a>
                </nav>
                <button
                    type="button"
                    class="md:hidden p-2 rounded-md border"
                    aria-controls="mobile-nav"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <nav
                                id="mobile-nav"
                                class="md:hidden flex flex-col gap-3 px-4 pb-4 text-sm"
                            >
                                {nav_links(close_menu)}
                                <a href=cv.as_str() download=cv.file_name()>
                                    "Download CV"
                                </a>
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
