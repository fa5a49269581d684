use leptos::prelude::*;

use super::{contact::SocialLink, reveal::Reveal};
use crate::{content::portfolio, reveal::RevealFrom};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = portfolio();
    let contact = &portfolio.contact;

    view! {
        <footer class="bg-gray-100 dark:bg-gray-900 py-12">
            <div class="container-custom">
                <div class="flex justify-center mb-8">
                    <a
                        href="#hero"
                        class="p-3 rounded-full bg-light-accent dark:bg-dark-accent text-white hover:-translate-y-1 transition-transform"
                        aria-label="Scroll to top"
                    >
                        "↑"
                    </a>
                </div>
                <div class="text-center">
                    <Reveal from=RevealFrom::Still>
                        <h2 class="text-2xl md:text-3xl font-bold mb-6">{portfolio.name.clone()}</h2>
                    </Reveal>
                    <div class="flex justify-center gap-6 mb-8">
                        <SocialLink href=contact.github_url() icon="devicon-github-plain" label="GitHub Profile" />
                        <SocialLink href=contact.linkedin_url() icon="devicon-linkedin-plain" label="LinkedIn Profile" />
                        <SocialLink href=contact.portfolio_url() icon="extra-link" label="Portfolio Website" />
                    </div>
                    <p class="text-gray-600 dark:text-gray-400">
                        {format!("© {BUILD_YEAR} {}. All rights reserved.", portfolio.name)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
