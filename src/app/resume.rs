use leptos::{either::Either, prelude::*};

use crate::content::Resume;
use crate::layout::{contact_lines, ContactLine, Section};

#[component]
pub fn ResumeSection(resume: &'static Resume) -> impl IntoView {
    let print = move |_| {
        if let Err(e) = window().print() {
            log::warn!("couldn't open print dialog: {e:?}");
        }
    };

    view! {
        <section id=Section::Resume.id() class="mt-8 bg-white rounded-xl shadow p-6">
            <div class="flex items-start justify-between">
                <div>
                    <h2 class="text-2xl font-bold">"Resume"</h2>
                    <p class="text-sm text-gray-600">
                        "A summary of experience, skills, and contact information for professional opportunities."
                    </p>
                </div>
                <div class="flex gap-2 print:hidden">
                    <a
                        href=resume.cv.as_str()
                        download=resume.cv.file_name()
                        class="px-3 py-2 border rounded"
                    >
                        "Download PDF"
                    </a>
                    <button
                        type="button"
                        on:click=print
                        class="px-3 py-2 bg-indigo-600 text-white rounded"
                    >
                        "Print"
                    </button>
                </div>
            </div>
            <div class="mt-6 grid md:grid-cols-3 gap-6">
                <Sidebar resume />
                <Experience resume />
            </div>
        </section>
    }
}

#[component]
pub fn ContactList(lines: Vec<ContactLine>) -> impl IntoView {
    lines
        .into_iter()
        .map(|line| {
            view! {
                <li>
                    {line.label}
                    ": "
                    {match line.href {
                        Some(href) => {
                            Either::Left(
                                view! {
                                    <a href=href class="text-indigo-600">
                                        {line.text}
                                    </a>
                                },
                            )
                        }
                        None => Either::Right(line.text),
                    }}
                </li>
            }
        })
        .collect_view()
}

#[component]
fn Sidebar(resume: &'static Resume) -> impl IntoView {
    view! {
        <aside class="space-y-4 md:col-span-1">
            <div>
                <h3 class="font-semibold">"Contact"</h3>
                <ul class="text-sm text-gray-700 mt-2 space-y-1">
                    <ContactList lines=contact_lines(&resume.contact) />
                </ul>
            </div>
            <div>
                <h3 class="font-semibold">"Skills"</h3>
                <ul class="mt-2 flex flex-wrap gap-2">
                    {resume
                        .skills
                        .iter()
                        .map(|s| view! { <li class="text-xs border px-2 py-1 rounded">{s.as_str()}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div>
                <h3 class="font-semibold mt-2">"Languages"</h3>
                <ul class="text-sm text-gray-700 mt-2">
                    {resume
                        .languages
                        .iter()
                        .map(|l| view! { <li>{l.as_str()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </aside>
    }
}

#[component]
fn Experience(resume: &'static Resume) -> impl IntoView {
    view! {
        <div class="md:col-span-2 space-y-6">
            <div>
                <h3 class="font-semibold">"Organizational Experience"</h3>
                <div class="mt-3 space-y-4">
                    {resume
                        .experience
                        .iter()
                        .map(|e| {
                            view! {
                                <div>
                                    <div class="flex items-center justify-between">
                                        <h4 class="font-medium">
                                            {format!("{} — {}", e.role, e.company)}
                                        </h4>
                                        <span class="text-sm text-gray-500">{e.period.as_str()}</span>
                                    </div>
                                    {e
                                        .details
                                        .as_deref()
                                        .map(|d| view! { <p class="text-sm text-gray-700 mt-1">{d}</p> })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h3 class="font-semibold">"Education"</h3>
                <div class="mt-3 space-y-3">
                    {resume
                        .education
                        .iter()
                        .map(|ed| {
                            view! {
                                <div class="flex items-center justify-between">
                                    <h4 class="font-medium">{ed.school.as_str()}</h4>
                                    <span class="text-sm text-gray-500">{ed.period.as_str()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h3 class="font-semibold">"Certifications & Projects"</h3>
                <div class="mt-3 text-sm text-gray-700 space-y-2">
                    <div>
                        <strong>"Certifications:"</strong>
                        <ul class="list-disc list-inside">
                            {resume
                                .certifications
                                .iter()
                                .map(|c| view! { <li>{c.as_str()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="mt-2">
                        <strong>"Projects:"</strong>
                        <ul class="list-disc list-inside">
                            {resume
                                .projects
                                .iter()
                                .map(|p| {
                                    view! {
                                        <li>
                                            <a href=p.link.as_str() class="text-indigo-600">
                                                {p.name.as_str()}
                                            </a>
                                            {format!(" — {}", p.description)}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::GLOBAL_RESUME;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_print_controls_hidden_in_print() {
        let resume = GLOBAL_RESUME.as_ref().unwrap();
        let html = Owner::new().with(|| view! { <ResumeSection resume /> }.to_html());
        let controls = html.find("class=\"flex gap-2 print:hidden\"").unwrap();
        let download = html.find("Download PDF").unwrap();
        let print = html.find(">Print<").unwrap();
        assert!(controls < download && download < print);
        assert_eq!(html.matches("print:hidden").count(), 1);
    }
}
