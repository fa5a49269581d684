use leptos::prelude::*;

use super::{reveal::Reveal, section::SectionHeading};
use crate::{
    content::portfolio,
    projects::{all_tags, filter_projects, Project, TagFilter},
};

const ACTIVE_FILTER: &str =
    "px-6 py-3 rounded-full transition-all duration-300 font-medium bg-light-accent dark:bg-dark-accent text-white shadow-lg";
const IDLE_FILTER: &str =
    "px-6 py-3 rounded-full transition-all duration-300 font-medium card border hover:shadow-lg";

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &portfolio().projects;
    let (selected, set_selected) = signal(TagFilter::All);
    let visible = Memo::new(move |_| {
        selected.with(|filter| {
            filter_projects(projects, filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let filters = std::iter::once(TagFilter::All)
        .chain(all_tags(projects).into_iter().map(TagFilter::Tag))
        .collect::<Vec<_>>();

    view! {
        <section id="projects" class="section py-20">
            <div class="container-custom">
                <SectionHeading title="My" accent="Projects" />
                <Reveal delay_ms=200 class="flex flex-wrap justify-center gap-4 mb-12">
                    {filters
                        .into_iter()
                        .map(|filter| {
                            let label = filter.label().to_string();
                            let is_active = {
                                let filter = filter.clone();
                                move || selected.with(|s| *s == filter)
                            };
                            view! {
                                <button
                                    class=move || if is_active() { ACTIVE_FILTER } else { IDLE_FILTER }
                                    on:click=move |_| set_selected.set(filter.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || visible.get()
                        key=|project| project.title.clone()
                        children=move |project: Project| {
                            view! {
                                <Reveal class="h-full">
                                    <ProjectCard project />
                                </Reveal>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        tags,
        github_url,
        live_url,
    } = project;

    view! {
        <div class="card h-full overflow-hidden group hover:-translate-y-1 transition-transform">
            <div class="h-48 bg-gradient-to-br from-light-accent to-dark-accent relative overflow-hidden">
                <div class="absolute inset-0 bg-black/20"></div>
                <div class="h-full w-full flex items-center justify-center relative z-10">
                    <h3 class="text-white font-bold text-xl drop-shadow-lg">{title.clone()}</h3>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold font-heading mb-3">{title.clone()}</h3>
                <p class="mb-4 leading-relaxed">{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 text-xs rounded-full font-medium bg-light-accent dark:bg-dark-accent text-white">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-light-accent dark:hover:text-dark-accent transition-colors duration-200"
                        aria-label=format!("View {title} source code on GitHub")
                    >
                        <i class="devicon-github-plain" />
                    </a>
                    <a
                        href=live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-light-accent dark:hover:text-dark-accent transition-colors duration-200"
                        aria-label=format!("View {title} live demo")
                    >
                        <i class="extra-link" />
                    </a>
                </div>
            </div>
        </div>
    }
}
