mod avatar;
pub mod cv_modal;
mod header;
mod homepage;
mod projects;
mod resume;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use cv_modal::CvModalState;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-gray-50 text-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // one CV preview per page instance
    provide_context(CvModalState::new());

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Not Found" />
        <main class="max-w-5xl mx-auto px-4 py-16 text-center">
            <h1 class="text-2xl font-bold">"Page not found."</h1>
            <a href="/" class="text-indigo-600 mt-4 inline-block">
                "Back to the portfolio"
            </a>
        </main>
    }
}
