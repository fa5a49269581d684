use leptos::prelude::*;

use crate::typewriter::{Typewriter, TypewriterConfig};

#[component]
pub fn TypedText(
    strings: Vec<String>,
    #[prop(optional)] config: Option<TypewriterConfig>,
) -> impl IntoView {
    let writer = match Typewriter::new(strings, config.unwrap_or_default()) {
        Ok(writer) => writer,
        Err(e) => {
            log::error!("{e}");
            return ().into_any();
        }
    };
    let (writer, set_writer) = signal(writer);

    // Re-armed after every tick. Effects only run in the browser, so the server
    // renders the first (empty) frame.
    Effect::new(move |_| {
        let Some(delay) = writer.with(|w| (!w.is_halted()).then(|| w.delay())) else {
            return;
        };
        match set_timeout_with_handle(
            move || {
                let _ = set_writer.try_update(|w| {
                    w.tick();
                });
            },
            delay,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't schedule typing tick: {e:?}"),
        }
    });
    halt_on_cleanup(set_writer);

    view! {
        <span>{move || writer.with(|w| w.text().to_string())}</span>
        <span class="ml-0.5 animate-pulse text-light-accent dark:text-dark-accent">"|"</span>
    }
    .into_any()
}

/// A tick that fires after unmount must not touch the writer.
fn halt_on_cleanup(set_writer: WriteSignal<Typewriter>) {
    on_cleanup(move || {
        let _ = set_writer.try_update_untracked(|w| w.halt());
    });
}
