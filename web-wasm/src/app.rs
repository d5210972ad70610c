//! Main application component

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use portfolio_common::ContentStore;

use crate::components::{
    about::About, certificates::Certificates, contact::Contact, footer::Footer, hero::Hero,
    navbar::Navbar, projects::Projects, skills::Skills,
};
use crate::theme::provide_theme;

/// Application root: resolves the theme, loads and checks the content
/// store, and lays out the page sections
#[component]
pub fn App() -> impl IntoView {
    provide_theme();

    let content = ContentStore::load();
    if let Err(err) = content.verify() {
        // broken content renders anyway; the check only makes it loud
        web_sys::console::error_1(&JsValue::from_str(&format!("content check failed: {err}")));
    }
    provide_context(content);

    view! {
        <div class="site">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <Certificates />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
