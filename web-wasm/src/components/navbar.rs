//! Fixed top navigation
//!
//! Elevates (solid background + shadow) once the page is scrolled past
//! 50px, hosts the theme toggle, and collapses to a full-screen overlay
//! menu on small screens.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use portfolio_common::ContentStore;

use crate::components::icons::{CloseIcon, MenuIcon, MoonIcon, SunIcon};
use crate::theme::use_theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let theme = use_theme();
    let (is_open, set_is_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // scroll listener lives as long as the page does
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_scrolled.set(offset > 50.0);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    });

    let desktop_items = content.nav_items.clone();
    let mobile_items = content.nav_items;

    view! {
        <header class="navbar" class:scrolled=move || scrolled.get()>
            <div class="container navbar-inner">
                <a href="#home" class="navbar-brand">"Portfolio"</a>

                <nav class="navbar-links">
                    {desktop_items
                        .into_iter()
                        .map(|item| view! { <a href=item.href>{item.name}</a> })
                        .collect_view()}
                    <button
                        class="icon-button"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        <Show when=move || theme.get().is_dark() fallback=|| view! { <MoonIcon /> }>
                            <SunIcon />
                        </Show>
                    </button>
                </nav>

                <div class="navbar-mobile-controls">
                    <button
                        class="icon-button"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        <Show when=move || theme.get().is_dark() fallback=|| view! { <MoonIcon /> }>
                            <SunIcon />
                        </Show>
                    </button>
                    <button
                        class="icon-button"
                        aria-label="Toggle menu"
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        <Show when=move || is_open.get() fallback=|| view! { <MenuIcon /> }>
                            <CloseIcon />
                        </Show>
                    </button>
                </div>
            </div>

            <div class="mobile-menu" class:open=move || is_open.get()>
                {mobile_items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a href=item.href on:click=move |_| set_is_open.set(false)>
                                {item.name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
