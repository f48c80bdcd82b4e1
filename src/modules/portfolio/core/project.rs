use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "New Project";
pub const DEFAULT_CATEGORY: &str = "Poster Design";
pub const DEFAULT_DESCRIPTION: &str = "Project description here...";
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&q=80&w=1200";

/// One gallery entry, shaped exactly like an element of the published `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub year: String,
}

/// Caller-supplied fields for a new project. Anything left `None` takes the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub year: Option<String>,
}

/// Partial update. There is deliberately no `id` here: identity never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub year: Option<String>,
}

impl ProjectDraft {
    pub fn into_project(self, id: String, current_year: i32) -> Project {
        Project {
            id,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            category: self.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image_url: self
                .image_url
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            year: self.year.unwrap_or_else(|| current_year.to_string()),
        }
    }
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.year.is_none()
    }

    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = image_url;
        }
        if let Some(year) = self.year {
            project.year = year;
        }
    }
}
