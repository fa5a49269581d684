use leptos::prelude::*;

use super::{reveal::Reveal, section::SectionHeading};
use crate::content::portfolio;

#[component]
pub fn Skills() -> impl IntoView {
    let groups = portfolio().core_skills.groups();

    view! {
        <section id="skills" class="section py-20 bg-gray-50 dark:bg-gray-800/40">
            <div class="container-custom">
                <SectionHeading title="Core" accent="Skills" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {groups
                        .into_iter()
                        .enumerate()
                        .map(|(i, (heading, skills))| {
                            view! {
                                <Reveal delay_ms={(i as u32) * 100} class="card p-6">
                                    <h3 class="text-xl font-semibold mb-4">{heading}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <span class="badge bg-light-accent/10 text-light-accent dark:bg-dark-accent/10 dark:text-dark-accent">
                                                        {s.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
