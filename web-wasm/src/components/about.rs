//! About section: bio paragraphs plus the personal-info grid

use leptos::html;
use leptos::prelude::*;

use portfolio_common::reveal::Stagger;
use portfolio_common::ContentStore;

use crate::components::icons::{CheckCircleIcon, MailIcon, MapPinIcon, PhoneIcon};
use crate::reveal::use_section_reveal;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let profile = content.profile;

    let section_ref = NodeRef::<html::Section>::new();
    let (entered, _children) = use_section_reveal(section_ref, 0, Stagger::cards());

    let paragraphs = profile
        .bio_paragraphs()
        .into_iter()
        .map(|p| view! { <p>{p.to_string()}</p> })
        .collect_view();

    view! {
        <section id="about" node_ref=section_ref class="section" class:fade-in=move || entered.get()>
            <div class="container">
                <div class="section-title">
                    <h2>"About Me"</h2>
                    <p>"Get to know me better"</p>
                </div>

                <div class="about-grid">
                    <div class="about-story">
                        <div class="about-portrait">
                            <img src=profile.profile_image.clone() alt=profile.name.clone() />
                        </div>
                        <h3>"My Story"</h3>
                        <div class="about-bio">{paragraphs}</div>
                    </div>

                    <div class="about-info">
                        <h3>"Personal Information"</h3>
                        <div class="info-grid">
                            <div class="info-card">
                                <MapPinIcon />
                                <div>
                                    <p class="info-label">"Location"</p>
                                    <p>{profile.location.clone()}</p>
                                </div>
                            </div>
                            <div class="info-card">
                                <MailIcon />
                                <div>
                                    <p class="info-label">"Email"</p>
                                    <p>{profile.email.clone()}</p>
                                </div>
                            </div>
                            <div class="info-card">
                                <PhoneIcon />
                                <div>
                                    <p class="info-label">"Phone"</p>
                                    <p>{profile.phone.clone()}</p>
                                </div>
                            </div>
                            <div class="info-card">
                                <CheckCircleIcon />
                                <div>
                                    <p class="info-label">"Availability"</p>
                                    <p>{profile.availability.clone()}</p>
                                </div>
                            </div>
                        </div>

                        <a href="#contact" class="btn btn-primary">"Get In Touch"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
