//! Projects section
//!
//! Tag pills and a free-text search drive the filter index; the visible
//! subset recomputes per keystroke through a memo. Cards are the staggered
//! reveal children of the section; an empty result renders the "no match"
//! state rather than nothing.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;

use portfolio_common::filter::{ProjectFilterIndex, ALL_TAG};
use portfolio_common::reveal::Stagger;
use portfolio_common::types::Project;
use portfolio_common::ContentStore;

use crate::components::icons::{ExternalLinkIcon, SearchIcon, SocialIcon};
use crate::reveal::use_section_reveal;

fn pill_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let card_count = content.projects.len();
    let index = Arc::new(ProjectFilterIndex::new(content.projects));

    let (selected_tag, set_selected_tag) = signal(ALL_TAG.to_string());
    let (query, set_query) = signal(String::new());

    let visible = Memo::new({
        let index = Arc::clone(&index);
        move |_| {
            index
                .visible(&selected_tag.get(), &query.get())
                .into_iter()
                .cloned()
                .collect::<Vec<Project>>()
        }
    });

    let section_ref = NodeRef::<html::Section>::new();
    let (entered, revealed) = use_section_reveal(section_ref, card_count, Stagger::cards());

    let pills = index
        .tags()
        .to_vec()
        .into_iter()
        .map(|tag| {
            let label = pill_label(&tag);
            let is_selected = {
                let tag = tag.clone();
                move || selected_tag.get() == tag
            };
            view! {
                <button
                    class="tag-pill"
                    class:selected=is_selected
                    on:click=move |_| set_selected_tag.set(tag.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class="section"
            class:fade-in=move || entered.get()
        >
            <div class="container">
                <div class="section-title">
                    <h2>"Projects"</h2>
                    <p>"Explore my recent work and creative solutions"</p>
                </div>

                <div class="project-controls">
                    <div class="project-search">
                        <SearchIcon />
                        <input
                            type="text"
                            placeholder="Search projects..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="tag-row">{pills}</div>
                </div>

                <div class="project-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(position, project)| {
                                let shown = move || {
                                    revealed.get().get(position).copied().unwrap_or(false)
                                };
                                view! { <ProjectCard project=project shown=shown /> }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=move || visible.get().is_empty()>
                    <div class="project-empty">
                        <p>"No projects found matching your criteria."</p>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard<F>(project: Project, shown: F) -> impl IntoView
where
    F: Fn() -> bool + Clone + Send + Sync + 'static,
{
    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <span class="card-tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <div class="project-card" class:slide-up=shown>
            <div class="project-image">
                <img src=project.image.clone() alt=project.title.clone() />
                <div class="project-overlay">
                    <div class="project-links">
                        {project
                            .link
                            .map(|link| {
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="Visit project"
                                    >
                                        <ExternalLinkIcon />
                                    </a>
                                }
                            })}
                        {project
                            .github
                            .map(|github| {
                                view! {
                                    <a
                                        href=github
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label="View source code"
                                    >
                                        <SocialIcon
                                            icon="github".to_string()
                                            name="GitHub".to_string()
                                        />
                                    </a>
                                }
                            })}
                    </div>
                    <div class="card-tags">{tags}</div>
                </div>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
            </div>
        </div>
    }
}
