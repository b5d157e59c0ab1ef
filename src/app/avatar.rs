use leptos::prelude::*;

use crate::content::Photo;

/// Hero photograph. Never printed.
#[component]
pub fn Avatar(photo: &'static Photo) -> impl IntoView {
    view! {
        <img
            src=photo.src.as_str()
            alt=photo.alt.as_str()
            class="w-80 h-64 rounded-xl object-cover object-top shadow-lg print:hidden"
            loading="lazy"
        />
    }
}
