use crate::modules::portfolio::core::project::Project;
use serde::Serialize;

/// Sentinel category that selects every project.
pub const ALL: &str = "All";

/// `"All"` followed by each distinct category in first-seen order. A project filed
/// under a literal `"All"` category is already covered by the sentinel.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for project in projects {
        if !out.iter().any(|c| *c == project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

pub fn filter<'a>(projects: &'a [Project], active_category: &str) -> Vec<&'a Project> {
    if active_category == ALL {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.category == active_category)
        .collect()
}

/// What the public gallery shows for one category tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    pub categories: Vec<String>,
    pub active_category: String,
    pub projects: Vec<Project>,
}

impl GalleryView {
    pub fn build(projects: &[Project], active_category: Option<&str>) -> Self {
        let active = active_category.unwrap_or(ALL);
        Self {
            categories: categories(projects),
            active_category: active.to_string(),
            projects: filter(projects, active).into_iter().cloned().collect(),
        }
    }
}
