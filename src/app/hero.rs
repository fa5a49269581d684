use leptos::prelude::*;

use super::{reveal::Reveal, typed_text::TypedText};
use crate::{content::portfolio, reveal::RevealFrom};

#[component]
pub fn Hero() -> impl IntoView {
    let portfolio = portfolio();

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center bg-gray-50 dark:bg-gray-900"
        >
            <div class="container-custom relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <Reveal from=RevealFrom::Still delay_ms=300>
                        <h2 class="text-lg md:text-xl text-gray-700 dark:text-gray-300 mb-3">
                            "Hello, I'm"
                        </h2>
                    </Reveal>
                    <Reveal delay_ms=500>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-6">
                            {portfolio.name.clone()} " "
                            <span class="text-light-accent dark:text-dark-accent">
                                {format!("({})", portfolio.handle)}
                            </span>
                        </h1>
                    </Reveal>
                    <div class="text-xl md:text-2xl text-muted mb-10 min-h-[2em]">
                        <TypedText strings=portfolio.roles.clone() />
                    </div>
                    <Reveal delay_ms=1200 class="flex flex-wrap justify-center gap-4">
                        <a href="#projects" class="btn btn-primary">
                            "View My Work"
                            <span class="ml-2">"→"</span>
                        </a>
                        <a
                            href="/CV.pdf"
                            class="btn btn-outline"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Download CV"
                            <i class="extra-download ml-2" />
                        </a>
                    </Reveal>
                </div>
                <div class="absolute bottom-10 left-1/2 -translate-x-1/2">
                    <div class="w-6 h-10 rounded-full border-2 border-light-accent dark:border-dark-accent flex justify-center">
                        <div class="w-1 h-3 bg-light-accent dark:bg-dark-accent rounded-full mt-2 animate-bounce"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
