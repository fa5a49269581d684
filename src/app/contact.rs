use leptos::prelude::*;

use super::{reveal::Reveal, section::SectionHeading};
use crate::{
    contact::{submit, ContactForm, Field, ValidationErrors},
    content::portfolio,
    reveal::RevealFrom,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-md border bg-white dark:bg-zinc-700 focus:outline-none focus:ring-2 focus:ring-light-accent dark:focus:ring-dark-accent";

#[component]
pub fn Contact() -> impl IntoView {
    let contact = &portfolio().contact;

    view! {
        <section id="contact" class="section py-20 bg-white dark:bg-gray-900">
            <div class="container-custom">
                <SectionHeading title="Get In" accent="Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Reveal from=RevealFrom::Left>
                        <h3 class="text-2xl font-bold mb-8">"Contact Information"</h3>
                        <div class="space-y-6">
                            <InfoRow icon="extra-location" heading="Location">
                                <p>{contact.location.clone()}</p>
                            </InfoRow>
                            <InfoRow icon="extra-email" heading="Email">
                                <a
                                    href=format!("mailto:{}", contact.email)
                                    class="hover:text-light-accent dark:hover:text-dark-accent transition-colors"
                                >
                                    {contact.email.clone()}
                                </a>
                            </InfoRow>
                            <InfoRow icon="extra-phone" heading="Phone">
                                <a
                                    href=format!("tel:{}", contact.phone)
                                    class="hover:text-light-accent dark:hover:text-dark-accent transition-colors"
                                >
                                    {contact.phone.clone()}
                                </a>
                            </InfoRow>
                        </div>
                        <div class="mt-12">
                            <h3 class="text-xl font-bold mb-6">"Find Me On"</h3>
                            <div class="flex gap-4 text-xl">
                                <SocialLink href=contact.github_url() icon="devicon-github-plain" label="GitHub Profile" />
                                <SocialLink href=contact.linkedin_url() icon="devicon-linkedin-plain" label="LinkedIn Profile" />
                                <SocialLink href=contact.portfolio_url() icon="extra-link" label="Portfolio Website" />
                            </div>
                        </div>
                    </Reveal>
                    <Reveal from=RevealFrom::Right delay_ms=200>
                        <h3 class="text-2xl font-bold mb-8">"Send Me a Message"</h3>
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(icon: &'static str, heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="p-3 rounded-full bg-light-accent/10 dark:bg-dark-accent/20 text-light-accent dark:text-dark-accent">
                <i class=icon />
            </div>
            <div>
                <h4 class="text-lg font-semibold mb-1">{heading}</h4>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn SocialLink(href: String, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="p-3 rounded-full bg-gray-100 dark:bg-zinc-700 hover:bg-light-accent dark:hover:bg-dark-accent hover:text-white hover:-translate-y-1 transition-all"
            aria-label=label
        >
            <i class=icon />
        </a>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ValidationErrors::default());
    // fields are re-validated on every edit once a submit has been attempted
    let submitted = RwSignal::new(false);

    view! {
        <form
            class="space-y-6"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                submitted.set(true);
                match submit(&form.get_untracked()) {
                    Ok(confirmation) => {
                        if let Err(e) = window().alert_with_message(confirmation) {
                            log::warn!("couldn't show confirmation: {e:?}");
                        }
                        form.set(ContactForm::default());
                        errors.set(ValidationErrors::default());
                        submitted.set(false);
                    }
                    Err(e) => {
                        log::debug!("contact form rejected: {e}");
                        errors.set(e);
                    }
                }
            }
        >
            <FormField field=Field::Name label="Your Name" placeholder="John Doe" form errors submitted />
            <FormField
                field=Field::Email
                label="Email Address"
                placeholder="john@example.com"
                input_type="email"
                form
                errors
                submitted
            />
            <FormField
                field=Field::Subject
                label="Subject"
                placeholder="Project Discussion"
                form
                errors
                submitted
            />
            <FormField
                field=Field::Message
                label="Your Message"
                placeholder="Write your message here..."
                multiline=true
                form
                errors
                submitted
            />
            <button type="submit" class="btn btn-primary w-full hover:scale-[1.02] active:scale-[0.98] transition-transform">
                "Send Message"
                <span class="ml-2">"➤"</span>
            </button>
        </form>
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    form: RwSignal<ContactForm>,
    errors: RwSignal<ValidationErrors>,
    submitted: RwSignal<bool>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = field.to_string().to_lowercase();
    let value = move || form.with(|f| f.value(field).to_string());
    let error = move || errors.with(|e| e.get(field).map(|e| e.to_string()));
    let on_input = move |ev: leptos::ev::Event| {
        let new = event_target_value(&ev);
        form.update(|f| *f.value_mut(field) = new);
        if submitted.get_untracked() {
            form.with_untracked(|f| errors.update(|e| e.recheck(f, field)));
        }
    };
    let class = move || {
        let border = if error().is_some() {
            "border-red-500 dark:border-red-400"
        } else {
            "border-gray-300 dark:border-zinc-600"
        };
        format!("{INPUT_CLASS} {border}")
    };

    let input = if multiline {
        view! {
            <textarea
                id=id.clone()
                rows=6
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                id=id.clone()
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                {label}
            </label>
            {input}
            {move || {
                error()
                    .map(|msg| {
                        view! { <p class="mt-1 text-sm text-red-500 dark:text-red-400">{msg}</p> }
                    })
            }}
        </div>
    }
}
