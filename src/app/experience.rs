use leptos::prelude::*;

use super::{reveal::Reveal, section::SectionHeading};
use crate::{
    content::{portfolio, Certification, Education, Experience as Job},
    reveal::RevealFrom,
};

const STAGGER_MS: u32 = 200;

#[component]
pub fn Experience() -> impl IntoView {
    let portfolio = portfolio();

    view! {
        <section id="experience" class="section py-20">
            <div class="container-custom">
                <SectionHeading title="Experience &" accent="Education" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <div>
                        <Reveal from=RevealFrom::Left>
                            <h3 class="text-2xl font-bold mb-8">"Professional Experience"</h3>
                        </Reveal>
                        <div class="space-y-1">
                            {portfolio
                                .professional_experience
                                .iter()
                                .enumerate()
                                .map(|(i, job)| view! { <JobItem job=job.clone() index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <Reveal from=RevealFrom::Right>
                            <h3 class="text-2xl font-bold mb-8">"Education"</h3>
                        </Reveal>
                        <div class="space-y-1">
                            {portfolio
                                .education
                                .iter()
                                .enumerate()
                                .map(|(i, edu)| view! { <EducationItem edu=edu.clone() index=i /> })
                                .collect_view()}
                        </div>
                        <Reveal from=RevealFrom::Right>
                            <h3 class="text-2xl font-bold mt-12 mb-8">"Certifications"</h3>
                        </Reveal>
                        <div class="space-y-4">
                            {portfolio
                                .certifications
                                .iter()
                                .enumerate()
                                .map(|(i, cert)| {
                                    view! { <CertificationItem cert=cert.clone() index=i /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(title: String, badge: String, period: String, children: Children) -> impl IntoView {
    view! {
        <div class="timeline-item">
            <div class="timeline-dot bg-light-accent dark:bg-dark-accent">
                <span class="w-2 h-2 bg-white dark:bg-dark-bg rounded-full"></span>
            </div>
            <div class="card p-6 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700">
                <div class="flex flex-wrap items-center justify-between gap-2 mb-2">
                    <h4 class="text-xl font-semibold">{title}</h4>
                    <span class="badge bg-light-accent/10 text-light-accent dark:bg-dark-accent/10 dark:text-dark-accent">
                        {badge}
                    </span>
                </div>
                <div class="flex items-center mb-4 text-sm opacity-80">
                    <span>{period}</span>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn JobItem(job: Job, index: usize) -> impl IntoView {
    let Job {
        role,
        company,
        period,
        responsibilities,
    } = job;
    view! {
        <Reveal delay_ms={(index as u32) * STAGGER_MS}>
            <TimelineCard title=role badge=company period=period>
                <ul class="space-y-2">
                    {responsibilities
                        .into_iter()
                        .map(|r| {
                            view! {
                                <li class="flex gap-2 text-gray-700 dark:text-gray-300">
                                    <span class="text-light-accent dark:text-dark-accent shrink-0">
                                        "✓"
                                    </span>
                                    <span>{r}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </TimelineCard>
        </Reveal>
    }
}

#[component]
fn EducationItem(edu: Education, index: usize) -> impl IntoView {
    let Education {
        degree,
        institution,
        period,
        details,
    } = edu;
    view! {
        <Reveal delay_ms={(index as u32) * STAGGER_MS}>
            <TimelineCard title=degree badge=institution period=period>
                <p class="opacity-90">{details}</p>
            </TimelineCard>
        </Reveal>
    }
}

#[component]
fn CertificationItem(cert: Certification, index: usize) -> impl IntoView {
    view! {
        <Reveal delay_ms={(index as u32) * STAGGER_MS}>
            <div class="card p-5 flex justify-between items-center bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 hover:-translate-y-1 transition-transform">
                <div>
                    <h4 class="text-lg font-semibold">{cert.name}</h4>
                    <p class="text-sm opacity-80">{cert.institution}</p>
                </div>
                <div class="text-light-accent dark:text-dark-accent font-medium">{cert.date}</div>
            </div>
        </Reveal>
    }
}
