use leptos::prelude::*;

use super::{reveal::Reveal, section::SectionHeading};
use crate::{content::portfolio, reveal::RevealFrom};

#[component]
pub fn About() -> impl IntoView {
    let portfolio = portfolio();

    view! {
        <section id="about" class="section py-20">
            <div class="container-custom">
                <SectionHeading title="About" accent="Me" />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-12 items-center">
                    <Reveal from=RevealFrom::Left class="flex justify-center">
                        <div class="w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-light-accent dark:border-dark-accent shadow-2xl bg-white">
                            <img
                                src="/avatar.png"
                                alt=portfolio.name.clone()
                                class="w-full h-full object-cover object-center"
                            />
                        </div>
                    </Reveal>
                    <Reveal from=RevealFrom::Right delay_ms=200 class="relative lg:col-span-2">
                        <div class="card p-8">
                            <h3 class="text-2xl font-semibold mb-4">{portfolio.headline.clone()}</h3>
                            <div class="space-y-4 mb-8">
                                {portfolio
                                    .bio
                                    .iter()
                                    .map(|p| view! { <p class="leading-relaxed">{p.clone()}</p> })
                                    .collect_view()}
                            </div>
                            <div class="p-4 rounded-xl border border-light-accent/10">
                                <h4 class="text-lg font-semibold mb-3">"Languages"</h4>
                                <div class="flex flex-wrap gap-3">
                                    {portfolio
                                        .languages
                                        .iter()
                                        .map(|language| {
                                            view! {
                                                <div class="flex items-center rounded-full px-3 py-1 border border-light-accent/20 hover:bg-light-accent/20 transition-colors duration-300">
                                                    <span class="text-sm font-medium">
                                                        {language.name.clone()}
                                                    </span>
                                                    <span class="mx-2 opacity-60">"•"</span>
                                                    <span class="text-sm font-semibold text-light-accent dark:text-dark-accent">
                                                        {language.proficiency.clone()}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
