//! Certificates timeline, entries staggered down the line

use leptos::html;
use leptos::prelude::*;

use portfolio_common::reveal::Stagger;
use portfolio_common::ContentStore;

use crate::components::icons::{CalendarIcon, ExternalLinkIcon};
use crate::reveal::use_section_reveal;

#[component]
pub fn Certificates() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let certificates = content.certificates;

    let section_ref = NodeRef::<html::Section>::new();
    let (entered, revealed) = use_section_reveal(section_ref, certificates.len(), Stagger::timeline());

    let entries = certificates
        .into_iter()
        .enumerate()
        .map(|(position, certificate)| {
            let shown = move || revealed.get().get(position).copied().unwrap_or(false);
            let side = if position % 2 == 0 { "right" } else { "left" };
            view! {
                <div class=format!("timeline-item {side}") class:slide-up=shown>
                    <div class="timeline-dot"></div>
                    <div class="timeline-card">
                        <div class="timeline-head">
                            <h3>{certificate.title}</h3>
                            <span class="timeline-date">
                                <CalendarIcon />
                                {certificate.date}
                            </span>
                        </div>
                        <div class="timeline-org">{certificate.organization}</div>
                        <p>{certificate.description}</p>
                        {certificate
                            .link
                            .map(|link| {
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="timeline-link"
                                    >
                                        "View Certificate"
                                        <ExternalLinkIcon size=14 />
                                    </a>
                                }
                            })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id="certificates"
            node_ref=section_ref
            class="section section-alt"
            class:fade-in=move || entered.get()
        >
            <div class="container">
                <div class="section-title">
                    <h2>"Certificates"</h2>
                    <p>"Education & certifications"</p>
                </div>

                <div class="timeline">
                    <div class="timeline-line"></div>
                    <div class="timeline-items">{entries}</div>
                </div>
            </div>
        </section>
    }
}
