//! Landing section
//!
//! No viewport watcher here: the hero is visible at load, so the intro is a
//! fixed cascade. Title immediately, subtitle at 300ms, call-to-action at
//! 600ms, all through the same timer seam the reveal controller uses.

use leptos::prelude::*;

use portfolio_common::schedule::TimerScheduler;
use portfolio_common::ContentStore;

use crate::components::icons::{ChevronDownIcon, MailIcon, SocialIcon};
use crate::reveal::GlooScheduler;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let profile = content.profile;
    let socials = content.socials;

    let (subtitle_in, set_subtitle_in) = signal(false);
    let (cta_in, set_cta_in) = signal(false);

    Effect::new(move |_| {
        let mut scheduler = GlooScheduler::new();
        scheduler.schedule_ms(300, Box::new(move || set_subtitle_in.set(true)));
        scheduler.schedule_ms(600, Box::new(move || set_cta_in.set(true)));
        // the scheduler owns the timeouts; park it until unmount
        let parked = send_wrapper::SendWrapper::new(scheduler);
        on_cleanup(move || drop(parked.take()));
    });

    let email_href = format!("mailto:{}", profile.email);

    view! {
        <section id="home" class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title fade-in">{profile.name.clone()}</h1>

                <p class="hero-subtitle" class:slide-up=move || subtitle_in.get()>
                    <span class="hero-role">{profile.title.clone()}</span>
                    <br />
                    "crafting exceptional digital experiences"
                </p>

                <div class="hero-cta" class:fade-in=move || cta_in.get()>
                    <a href="#projects" class="btn btn-primary">"View My Work"</a>
                    <a href="#contact" class="btn btn-secondary">"Get in Touch"</a>
                </div>

                <div class="hero-socials">
                    {socials
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-pill"
                                    aria-label=social.name.clone()
                                >
                                    <SocialIcon icon=social.icon name=social.name.clone() />
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href=email_href class="social-pill" aria-label="Email">
                        <MailIcon />
                    </a>
                </div>
            </div>

            <a href="#about" class="hero-scroll-hint" aria-label="Scroll down">
                <ChevronDownIcon />
            </a>
        </section>
    }
}
