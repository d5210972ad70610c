//! Project filter tests against the shipped catalog
//!
//! The unit tests in `filter.rs` use synthetic projects; these exercise the
//! real content set the site renders.

use portfolio_common::{ContentStore, ProjectFilterIndex};

/// Tag list starts with "all" and contains each shipped tag exactly once
#[test]
fn test_tags_from_shipped_catalog() {
    let store = ContentStore::load();
    let index = ProjectFilterIndex::new(store.projects.clone());

    let tags = index.tags();
    assert_eq!(tags[0], "all");
    for tag in tags {
        assert_eq!(tags.iter().filter(|t| *t == tag).count(), 1);
    }
    for project in index.projects() {
        for tag in &project.tags {
            assert!(tags.contains(tag));
        }
    }
}

/// "all" with an empty query returns the whole catalog in order
#[test]
fn test_all_tag_preserves_catalog_order() {
    let store = ContentStore::load();
    let index = ProjectFilterIndex::new(store.projects.clone());

    let visible = index.visible("all", "");
    let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
    let expected: Vec<&str> = store.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, expected);
}

/// A concrete tag returns exactly the projects carrying it
#[test]
fn test_tag_selects_exact_subset() {
    let store = ContentStore::load();
    let index = ProjectFilterIndex::new(store.projects.clone());

    for tag in index.tags().iter().skip(1) {
        let visible = index.visible(tag, "");
        for project in index.projects() {
            let carries = project.tags.iter().any(|t| t == tag);
            let shown = visible.iter().any(|p| p.id == project.id);
            assert_eq!(carries, shown, "tag {:?} project {:?}", tag, project.id);
        }
    }
}

/// Query casing never changes the result set
#[test]
fn test_query_casing_is_irrelevant() {
    let store = ContentStore::load();
    let index = ProjectFilterIndex::new(store.projects.clone());

    for query in ["REACT", "react", "ReAcT"] {
        let ids: Vec<&str> = index
            .visible("all", query)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let reference: Vec<&str> = index
            .visible("all", "react")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, reference);
    }
}

/// No match is an empty, displayable result rather than an error
#[test]
fn test_no_match_yields_empty_set() {
    let store = ContentStore::load();
    let index = ProjectFilterIndex::new(store.projects.clone());
    assert!(index.visible("all", "no such project anywhere").is_empty());
}
