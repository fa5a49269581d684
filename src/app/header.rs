use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::ThemeToggle;
use crate::content::portfolio;

const NAV_LINKS: [(&str, &str); 5] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Scroll offset (px) after which the header switches to its compact style.
const SCROLLED_OFFSET: f64 = 20.0;

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_OFFSET);
    let (menu_open, set_menu_open) = signal(false);

    let header_class = move || {
        if is_scrolled.get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-3 bg-light-bg/90 dark:bg-gray-900/90 shadow-md backdrop-blur-sm border-b border-gray-200/50 dark:border-gray-700/50"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-5 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="container-custom flex justify-between items-center">
                <a
                    href="#hero"
                    class="text-xl md:text-2xl font-heading font-bold hover:scale-105 transition-transform"
                >
                    {portfolio().name.clone()}
                </a>
                <button
                    class="md:hidden"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="nav-link hover:text-light-accent dark:hover:text-dark-accent"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </nav>
            </div>
            <nav class=move || {
                if menu_open.get() {
                    "md:hidden absolute w-full bg-white dark:bg-gray-900 shadow-lg block"
                } else {
                    "md:hidden absolute w-full bg-white dark:bg-gray-900 shadow-lg hidden"
                }
            }>
                <div class="container-custom py-4 flex flex-col gap-4">
                    {NAV_LINKS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="py-2 hover:text-light-accent dark:hover:text-dark-accent"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle with_label=true />
                </div>
            </nav>
        </header>
    }
}
