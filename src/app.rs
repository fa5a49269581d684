mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod section;
mod skills;
mod theme;
mod typed_text;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-light-bg text-light-text dark:bg-gray-900 dark:text-dark-text">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title formatter=|title| format!("{} - {title}", portfolio().name) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen">
            <div class="fixed top-0 left-0 w-full h-screen z-0 pointer-events-none overflow-hidden">
                <div class="absolute top-0 right-0 w-1/3 h-1/3 bg-light-accent/5 dark:bg-dark-accent/10 rounded-full blur-3xl translate-x-1/2 -translate-y-1/2"></div>
                <div class="absolute bottom-0 left-0 w-1/2 h-1/2 bg-light-accent/5 dark:bg-dark-accent/10 rounded-full blur-3xl -translate-x-1/3 translate-y-1/3"></div>
            </div>
            <Header />
            <main class="relative z-10">
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
