//! Browser side of the theme preference
//!
//! localStorage-backed preference store, the OS dark-mode query, and a
//! context wrapper so any component can read or toggle the theme. Applying
//! a theme toggles a `dark` class on `<html>`; every palette change below
//! that is plain CSS.

use leptos::prelude::*;
use portfolio_common::theme::{initial_theme, persist_theme, PreferenceStore, Theme};

/// Best-effort store over `window.localStorage`; unavailable or failing
/// storage degrades to session-only state
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// OS-level dark-mode signal, queried only when nothing is persisted
fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|media| media.matches())
        .unwrap_or(false)
}

/// Apply the theme by toggling the `dark` class on the document root so
/// every component restyles without re-render logic of its own
fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let class_list = root.class_list();
        let _ = if theme.is_dark() {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
    }
}

/// Shared theme handle passed down through context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggle());
    }
}

/// Resolve the startup theme, provide the context, and keep the persisted
/// value and document class in sync with every change
pub fn provide_theme() -> ThemeContext {
    let store = LocalStorageStore;
    let initial = initial_theme(&store, os_prefers_dark);
    apply_theme(initial);

    let (theme, set_theme) = signal(initial);
    Effect::new(move |_| {
        let current = theme.get();
        persist_theme(&LocalStorageStore, current);
        apply_theme(current);
    });

    let context = ThemeContext { theme, set_theme };
    provide_context(context);
    context
}

/// Fetch the theme handle provided by the app root
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
