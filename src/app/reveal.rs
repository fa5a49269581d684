use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{Reveal as RevealTrigger, RevealConfig, RevealFrom};

/// Wraps `children` in a block that slides in once it scrolls into view.
///
/// The observer stops after the first reveal and is released on unmount, so a
/// section removed before it was ever seen leaves nothing behind.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    #[prop(optional)] config: Option<RevealConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let target = NodeRef::<html::Div>::new();
    let (trigger, set_trigger) = signal(RevealTrigger::new(config));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                set_trigger.maybe_update(|t| t.observe(ratio));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![config.threshold]),
    );

    Effect::new(move |_| {
        if trigger.with(|t| t.is_revealed()) {
            stop();
        }
    });
    detach_on_cleanup(set_trigger);

    let class = move || {
        format!(
            "transition-all duration-700 ease-out {} {class}",
            trigger.with(|t| t.class(from))
        )
    };

    view! {
        <div node_ref=target class=class style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}

fn detach_on_cleanup(set_trigger: WriteSignal<RevealTrigger>) {
    on_cleanup(move || {
        let _ = set_trigger.try_update_untracked(|t| t.detach());
    });
}
