//! Contact section
//!
//! Info column plus the form. Validation runs on submit; typing into a
//! field clears only that field's error. The submit button is disabled
//! outside the idle phase, a failed POST surfaces an error banner, and the
//! success state reverts to idle after the fixed delay.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsValue;

use portfolio_common::contact::{validate, ContactFields, FormField, SubmitPhase, SUBMITTED_RESET_MS};
use portfolio_common::reveal::Stagger;
use portfolio_common::schedule::TimerScheduler;
use portfolio_common::ContentStore;

use crate::api::contact::submit_contact;
use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon, SendIcon};
use crate::reveal::{use_section_reveal, GlooScheduler};

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let profile = content.profile;

    let section_ref = NodeRef::<html::Section>::new();
    let (entered, _children) = use_section_reveal(section_ref, 0, Stagger::cards());

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(BTreeMap::<FormField, String>::new());
    let (phase, set_phase) = signal(SubmitPhase::Idle);
    let (submit_failed, set_submit_failed) = signal(false);

    // owns the success-reset timer so unmount cancels it
    let scheduler = Rc::new(RefCell::new(GlooScheduler::new()));
    let parked = SendWrapper::new(Rc::clone(&scheduler));
    on_cleanup(move || drop(parked.take()));

    let error_for = move |field: FormField| errors.with(|map| map.get(&field).cloned());
    let clear_error = move |field: FormField| {
        set_errors.update(|map| {
            map.remove(&field);
        });
    };

    let on_submit = {
        let scheduler = Rc::clone(&scheduler);
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if !phase.get_untracked().can_submit() {
                return;
            }

            let fields = ContactFields {
                name: name.get_untracked(),
                email: email.get_untracked(),
                subject: subject.get_untracked(),
                message: message.get_untracked(),
            };
            let found = validate(&fields);
            if !found.is_empty() {
                set_errors.set(found);
                return;
            }
            set_errors.set(BTreeMap::new());
            set_submit_failed.set(false);
            set_phase.update(|p| *p = p.begin());

            let scheduler = Rc::clone(&scheduler);
            spawn_local(async move {
                match submit_contact(&fields).await {
                    Ok(()) => {
                        set_phase.update(|p| *p = p.complete(true));
                        set_name.set(String::new());
                        set_email.set(String::new());
                        set_subject.set(String::new());
                        set_message.set(String::new());

                        scheduler.borrow_mut().schedule_ms(
                            SUBMITTED_RESET_MS,
                            Box::new(move || {
                                set_phase.try_update(|p| *p = p.expire());
                            }),
                        );
                    }
                    Err(err) => {
                        web_sys::console::error_2(
                            &JsValue::from_str("contact: submission failed"),
                            &err,
                        );
                        set_phase.update(|p| *p = p.complete(false));
                        set_submit_failed.set(true);
                    }
                }
            });
        }
    };

    let email_href = format!("mailto:{}", profile.email);
    let phone_href = profile.phone_href();

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="section"
            class:fade-in=move || entered.get()
        >
            <div class="container">
                <div class="section-title">
                    <h2>"Contact Me"</h2>
                    <p>"Get in touch"</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>"Let's Talk"</h3>
                        <p>
                            "Have a project in mind or want to discuss a potential collaboration? \
                             Feel free to reach out through any of the following contact methods."
                        </p>

                        <div class="contact-methods">
                            <div class="contact-method">
                                <span class="method-icon"><MailIcon /></span>
                                <div>
                                    <h4>"Email"</h4>
                                    <a href=email_href>{profile.email.clone()}</a>
                                </div>
                            </div>
                            <div class="contact-method">
                                <span class="method-icon"><PhoneIcon /></span>
                                <div>
                                    <h4>"Phone"</h4>
                                    <a href=phone_href>{profile.phone.clone()}</a>
                                </div>
                            </div>
                            <div class="contact-method">
                                <span class="method-icon"><MapPinIcon /></span>
                                <div>
                                    <h4>"Location"</h4>
                                    <p>{profile.location.clone()}</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Your Name"</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Akshar"
                                class:invalid=move || error_for(FormField::Name).is_some()
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    set_name.set(event_target_value(&ev));
                                    clear_error(FormField::Name);
                                }
                            />
                            {move || {
                                error_for(FormField::Name)
                                    .map(|msg| view! { <p class="field-error">{msg}</p> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="email">"Your Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="akshar@example.com"
                                class:invalid=move || error_for(FormField::Email).is_some()
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    clear_error(FormField::Email);
                                }
                            />
                            {move || {
                                error_for(FormField::Email)
                                    .map(|msg| view! { <p class="field-error">{msg}</p> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="subject">"Subject"</label>
                            <input
                                type="text"
                                id="subject"
                                placeholder="Project Inquiry"
                                class:invalid=move || error_for(FormField::Subject).is_some()
                                prop:value=move || subject.get()
                                on:input=move |ev| {
                                    set_subject.set(event_target_value(&ev));
                                    clear_error(FormField::Subject);
                                }
                            />
                            {move || {
                                error_for(FormField::Subject)
                                    .map(|msg| view! { <p class="field-error">{msg}</p> })
                            }}
                        </div>

                        <div class="form-group">
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                rows="5"
                                placeholder="Your message here..."
                                class:invalid=move || error_for(FormField::Message).is_some()
                                prop:value=move || message.get()
                                on:input=move |ev| {
                                    set_message.set(event_target_value(&ev));
                                    clear_error(FormField::Message);
                                }
                            ></textarea>
                            {move || {
                                error_for(FormField::Message)
                                    .map(|msg| view! { <p class="field-error">{msg}</p> })
                            }}
                        </div>

                        <Show when=move || submit_failed.get()>
                            <p class="submit-error">
                                "Sending failed. Please try again or use the email address above."
                            </p>
                        </Show>

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            class:success=move || phase.get() == SubmitPhase::Submitted
                            disabled=move || !phase.get().can_submit()
                        >
                            {move || match phase.get() {
                                SubmitPhase::Submitting => view! { <span>"Sending..."</span> }.into_any(),
                                SubmitPhase::Submitted => {
                                    view! { <span>"Message Sent Successfully!"</span> }.into_any()
                                }
                                SubmitPhase::Idle => {
                                    view! {
                                        <span class="btn-label">
                                            <SendIcon />
                                            "Send Message"
                                        </span>
                                    }
                                        .into_any()
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
