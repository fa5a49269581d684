use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::theme::{MemoryStorage, StorageError, Theme, ThemeStorage, ThemeStore};

/// `window.localStorage`, looked up on every access.
struct BrowserStorage;

impl BrowserStorage {
    fn is_available() -> bool {
        window().local_storage().ok().flatten().is_some()
    }
}

impl ThemeStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = window()
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = window()
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Mirrors the theme onto `<html>` so tailwind's `dark:` variants apply.
fn apply_to_document(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("couldn't set dark class: {e:?}");
    }
    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        log::warn!("couldn't set data-theme: {e:?}");
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    store: StoredValue<Arc<Mutex<Option<ThemeStore>>>>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.store.with_value(|store| {
            let mut store = store.lock().expect("should be able to lock theme store");
            if let Some(store) = store.as_mut() {
                store.toggle();
            }
        });
    }
}

/// Creates the page-wide theme store. The server always renders light; the
/// stored or preferred theme is picked up once the page hydrates.
pub fn provide_theme() {
    let (theme, set_theme) = signal(Theme::default());
    let store = StoredValue::new(Arc::new(Mutex::new(None::<ThemeStore>)));
    let prefers_dark = use_preferred_dark();

    Effect::new(move |_| {
        let prefers_dark = Some(prefers_dark.get_untracked());
        let mut theme_store = if BrowserStorage::is_available() {
            ThemeStore::init(BrowserStorage, prefers_dark)
        } else {
            log::warn!("localStorage unavailable, theme won't persist");
            ThemeStore::init(MemoryStorage::new(), prefers_dark)
        };
        theme_store.subscribe(apply_to_document);
        theme_store.subscribe(move |t| set_theme.set(t));
        store.with_value(|s| {
            *s.lock().expect("should be able to lock theme store") = Some(theme_store);
        });
    });

    provide_context(ThemeContext { theme, store });
}

#[component]
pub fn ThemeToggle(#[prop(optional)] with_label: bool) -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    let label = move || format!("Switch to {} mode", ctx.theme.get().toggled());

    view! {
        <div class="flex items-center gap-2">
            <button
                class="p-2 rounded-full bg-gray-100 dark:bg-gray-800 text-light-accent dark:text-dark-accent hover:scale-110 active:scale-95 transition-transform"
                on:click=move |_| ctx.toggle()
                aria-label=label
            >
                {move || if ctx.theme.get().is_dark() { "☀" } else { "☾" }}
            </button>
            {with_label
                .then(|| {
                    view! { <span class="text-sm text-gray-600 dark:text-gray-400">{label}</span> }
                })}
        </div>
    }
}
