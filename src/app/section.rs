use leptos::prelude::*;

use super::reveal::Reveal;

#[component]
pub fn SectionHeading(title: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold font-heading mb-4">
                {title} " " <span class="text-light-accent dark:text-dark-accent">{accent}</span>
            </h2>
            <div class="w-20 h-1 bg-light-accent dark:bg-dark-accent mx-auto rounded-full"></div>
        </Reveal>
    }
}
