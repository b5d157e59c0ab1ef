use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};

use super::avatar::Avatar;
use super::cv_modal::{CvModal, CvModalState};
use super::header::Header;
use super::projects::ProjectsGrid;
use super::resume::{ContactList, ResumeSection};
use crate::content::{Contact, Resume, GLOBAL_RESUME};
use crate::layout::{build_year, footer_line, page_title, reach_out_lines, Section};
use crate::modal::ModalEvent;
use crate::seo::PersonSchema;

#[component]
pub fn HomePage() -> impl IntoView {
    match GLOBAL_RESUME.as_ref() {
        Ok(resume) => Either::Left(view! { <Portfolio resume /> }),
        Err(e) => {
            log::error!("can't render portfolio: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <main class="max-w-5xl mx-auto px-4 py-16 text-center">
                    <h1 class="text-2xl font-bold">"This page is temporarily unavailable."</h1>
                </main>
            })
        }
    }
}

#[component]
fn Portfolio(resume: &'static Resume) -> impl IntoView {
    let schema = match PersonSchema::from(resume).to_script_body() {
        Ok(body) => Some(body),
        Err(e) => {
            log::warn!("skipping structured data: {e}");
            None
        }
    };

    view! {
        <Title text=page_title(resume) />
        <Meta name="description" content=resume.summary.clone() />
        {schema.map(|body| view! { <script type="application/ld+json" inner_html=body></script> })}
        <Header name=resume.name.as_str() cv=&resume.cv />
        <main class="max-w-5xl mx-auto px-4 py-8">
            <Hero resume />
            <ResumeSection resume />
            <ProjectsGrid projects=resume.projects.as_slice() />
            <About resume />
            <ContactSection contact=&resume.contact />
            <footer class="mt-12 py-6 text-center text-sm text-gray-500">
                {footer_line(build_year(), &resume.name)}
            </footer>
        </main>
        <CvModal cv=&resume.cv />
    }
}

#[component]
fn Hero(resume: &'static Resume) -> impl IntoView {
    let cv_modal = expect_context::<CvModalState>();

    view! {
        <section id=Section::Home.id() class="grid md:grid-cols-2 gap-8 items-center py-8">
            <div>
                <h1 class="text-4xl md:text-5xl font-extrabold mb-2">
                    "Hi, I'm " <span class="text-indigo-600">{resume.name.as_str()}</span>
                </h1>
                <p class="text-lg text-gray-700 mb-4">{resume.title.as_str()}</p>
                <p class="text-gray-700 mb-6">{resume.summary.as_str()}</p>
                <div class="flex gap-4 print:hidden">
                    <button
                        node_ref=cv_modal.trigger()
                        type="button"
                        aria-haspopup="dialog"
                        on:click=move |_| cv_modal.dispatch(ModalEvent::Open)
                        class="inline-block px-5 py-3 bg-indigo-600 text-white rounded-lg"
                    >
                        "View CV"
                    </button>
                    <a
                        href=resume.contact.github.as_str()
                        target="_blank"
                        rel="noreferrer"
                        class="inline-block px-5 py-3 border rounded-lg"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
            <div class="flex md:justify-end">
                <Avatar photo=&resume.photo />
            </div>
        </section>
    }
}

#[component]
fn About(resume: &'static Resume) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="mt-8 bg-white rounded-xl shadow p-6">
            <h2 class="text-2xl font-bold mb-3">"About"</h2>
            <p class="text-gray-700">
                {format!("{} based in {}.", resume.title, resume.contact.location)}
            </p>
            <div class="mt-4 text-sm text-gray-700">
                <strong>"Education: "</strong>
                {resume
                    .education
                    .iter()
                    .map(|ed| ed.school.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")}
            </div>
            <div class="mt-2 text-sm text-gray-700">
                <strong>"Speaks: "</strong>
                {resume.languages.join(", ")}
            </div>
        </section>
    }
}

#[component]
fn ContactSection(contact: &'static Contact) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="mt-8">
            <div class="bg-white rounded-xl shadow p-6">
                <h3 class="text-lg font-semibold mb-4">"Get in Touch"</h3>
                <p class="text-sm text-gray-600">
                    "Interested in collaborating or working together? Feel free to reach out via email or LinkedIn."
                </p>
                <ul class="mt-3 text-sm">
                    <ContactList lines=reach_out_lines(contact) />
                </ul>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_hero_controls_and_photo_hidden_in_print() {
        let resume = GLOBAL_RESUME.as_ref().unwrap();
        let html = Owner::new().with(|| {
            provide_context(CvModalState::new());
            view! { <Hero resume /> }.to_html()
        });
        let controls = html.find("class=\"flex gap-4 print:hidden\"").unwrap();
        let view_cv = html.find("View CV").unwrap();
        assert!(controls < view_cv);
        assert!(html.contains("aria-haspopup=\"dialog\""));
        // the controls group and the photo
        assert_eq!(html.matches("print:hidden").count(), 2);
    }
}
