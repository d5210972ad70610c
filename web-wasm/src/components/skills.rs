//! Skills section
//!
//! Bars are the staggered children of this section: each one widens from 0%
//! to its skill level once its reveal fires, left to right across the
//! category groups.

use leptos::html;
use leptos::prelude::*;

use portfolio_common::reveal::Stagger;
use portfolio_common::types::SkillCategory;
use portfolio_common::ContentStore;

use crate::reveal::use_section_reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<ContentStore>();

    // display order drives the stagger index
    let grouped: Vec<(SkillCategory, Vec<_>)> = SkillCategory::ALL
        .iter()
        .map(|&category| {
            let group: Vec<_> = content
                .skills
                .iter()
                .filter(|skill| skill.category == category)
                .cloned()
                .collect();
            (category, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect();
    let bar_count: usize = grouped.iter().map(|(_, group)| group.len()).sum();

    let section_ref = NodeRef::<html::Section>::new();
    let (entered, revealed) = use_section_reveal(section_ref, bar_count, Stagger::bars());

    let mut bar_index = 0;
    let groups = grouped
        .into_iter()
        .map(|(category, group)| {
            let bars = group
                .into_iter()
                .map(|skill| {
                    let index = bar_index;
                    bar_index += 1;
                    let level = skill.level;
                    let width = move || {
                        if revealed.get().get(index).copied().unwrap_or(false) {
                            format!("{level}%")
                        } else {
                            "0%".to_string()
                        }
                    };
                    view! {
                        <div class="skill">
                            <div class="skill-heading">
                                <span class="skill-name">{skill.name}</span>
                                <span class="skill-level">{format!("{level}%")}</span>
                            </div>
                            <div class="skill-bar">
                                <div class="skill-bar-fill" style:width=width></div>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="skill-group">
                    <h3>{category.title()}</h3>
                    <div class="skill-list">{bars}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id="skills"
            node_ref=section_ref
            class="section section-alt"
            class:fade-in=move || entered.get()
        >
            <div class="container">
                <div class="section-title">
                    <h2>"My Skills"</h2>
                    <p>"Technical skills & proficiency"</p>
                </div>
                <div class="skills-grid">{groups}</div>
            </div>
        </section>
    }
}
