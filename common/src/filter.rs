//! Project tag/search filtering
//!
//! Derives the tag pill list from the project catalog and computes the
//! visible subset for a selected tag plus free-text query. Matching is
//! case-insensitive substring containment, nothing fancier. The last
//! `(tag, query)` result is memoized; with a three-project catalog that is
//! almost free, and it keeps per-keystroke work bounded if the catalog
//! grows.

use std::sync::Mutex;

use crate::types::Project;

/// Pseudo-tag selecting every project
pub const ALL_TAG: &str = "all";

/// Filter state derived from an immutable project list
pub struct ProjectFilterIndex {
    projects: Vec<Project>,
    tags: Vec<String>,
    memo: Mutex<Option<Memo>>,
}

struct Memo {
    tag: String,
    query: String,
    indices: Vec<usize>,
}

impl ProjectFilterIndex {
    pub fn new(projects: Vec<Project>) -> Self {
        let mut tags = vec![ALL_TAG.to_string()];
        for project in &projects {
            for tag in &project.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        Self {
            projects,
            tags,
            memo: Mutex::new(None),
        }
    }

    /// `"all"` followed by every distinct tag in first-seen order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Visible subset for the current tag and query, order-preserving.
    /// An empty result is a valid state, not an error.
    pub fn visible(&self, selected_tag: &str, query: &str) -> Vec<&Project> {
        if let Ok(guard) = self.memo.lock() {
            if let Some(memo) = guard.as_ref() {
                if memo.tag == selected_tag && memo.query == query {
                    return memo.indices.iter().map(|&i| &self.projects[i]).collect();
                }
            }
        }

        let needle = query.to_lowercase();
        let indices: Vec<usize> = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, project)| {
                matches_tag(project, selected_tag) && matches_query(project, &needle)
            })
            .map(|(i, _)| i)
            .collect();

        let result = indices.iter().map(|&i| &self.projects[i]).collect();
        if let Ok(mut guard) = self.memo.lock() {
            *guard = Some(Memo {
                tag: selected_tag.to_string(),
                query: query.to_string(),
                indices,
            });
        }
        result
    }
}

fn matches_tag(project: &Project, selected_tag: &str) -> bool {
    selected_tag == ALL_TAG || project.tags.iter().any(|tag| tag == selected_tag)
}

fn matches_query(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_projects() -> Vec<Project> {
        vec![
            Project {
                id: "p1".to_string(),
                title: "Task Manager".to_string(),
                description: "AI-driven prioritization".to_string(),
                tags: ["React", "AI"].map(str::to_string).to_vec(),
                ..Default::default()
            },
            Project {
                id: "p2".to_string(),
                title: "Dashboard".to_string(),
                description: "Real-time charts".to_string(),
                tags: ["React", "D3.js"].map(str::to_string).to_vec(),
                ..Default::default()
            },
            Project {
                id: "p3".to_string(),
                title: "Store".to_string(),
                description: "Headless commerce".to_string(),
                tags: ["Svelte"].map(str::to_string).to_vec(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_tags_all_first_then_first_seen_order() {
        let index = ProjectFilterIndex::new(sample_projects());
        assert_eq!(index.tags(), &["all", "React", "AI", "D3.js", "Svelte"]);
    }

    #[test]
    fn test_all_tag_returns_everything_in_order() {
        let index = ProjectFilterIndex::new(sample_projects());
        let visible = index.visible(ALL_TAG, "");
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_tag_filter_exact_membership() {
        let index = ProjectFilterIndex::new(sample_projects());
        let visible = index.visible("React", "");
        assert!(visible.iter().all(|p| p.tags.iter().any(|t| t == "React")));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_query_case_insensitive() {
        let index = ProjectFilterIndex::new(sample_projects());
        let upper: Vec<&str> = index.visible(ALL_TAG, "REACT").iter().map(|p| p.id.as_str()).collect();
        let lower: Vec<&str> = index.visible(ALL_TAG, "react").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(upper, lower);
        assert_eq!(upper, vec!["p1", "p2"]);
    }

    #[test]
    fn test_query_matches_description() {
        let index = ProjectFilterIndex::new(sample_projects());
        let visible = index.visible(ALL_TAG, "commerce");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "p3");
    }

    #[test]
    fn test_tag_and_query_combine() {
        let index = ProjectFilterIndex::new(sample_projects());
        let visible = index.visible("React", "charts");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "p2");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let index = ProjectFilterIndex::new(sample_projects());
        assert!(index.visible("Svelte", "charts").is_empty());
        assert!(index.visible(ALL_TAG, "cobol").is_empty());
    }

    #[test]
    fn test_memo_returns_same_result() {
        let index = ProjectFilterIndex::new(sample_projects());
        let first: Vec<&str> = index.visible("React", "a").iter().map(|p| p.id.as_str()).collect();
        let second: Vec<&str> = index.visible("React", "a").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(first, second);
    }
}
