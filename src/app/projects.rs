use leptos::prelude::*;

use crate::content::Project;
use crate::layout::{project_cards, Section};

#[component]
pub fn ProjectsGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="mt-8">
            <h2 class="text-2xl font-bold mb-3">"Projects"</h2>
            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {project_cards(projects)
                    .into_iter()
                    .map(|card| {
                        view! {
                            <article class="bg-white rounded-xl shadow p-4 hover:shadow-lg transition">
                                <h3 class="font-semibold text-lg">{card.name}</h3>
                                <p class="text-sm text-gray-600 mt-2">{card.description}</p>
                                <div class="mt-4 flex items-center justify-between">
                                    <a href=card.href class="text-indigo-600 text-sm">
                                        "View Project"
                                    </a>
                                    {card
                                        .stack
                                        .map(|stack| {
                                            view! {
                                                <span class="text-xs text-gray-400">{stack}</span>
                                            }
                                        })}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
