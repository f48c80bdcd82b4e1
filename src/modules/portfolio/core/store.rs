// Canonical local list of projects.
//
// Responsibilities
// - Keep display order (new entries go to the front).
// - Keep ids unique across every mutation path, including wholesale replacement from a snapshot.
// - Never talk to the network. Saving is a separate use case.

use crate::modules::portfolio::core::embedded_image::{self, ImageError};
use crate::modules::portfolio::core::project::{Project, ProjectDraft, ProjectPatch};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(String),

    #[error(transparent)]
    InvalidImage(#[from] ImageError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from fetched records, keeping the first record seen for each id.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let mut store = Self::new();
        store.replace_all(projects);
        store
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn replace_all(&mut self, projects: Vec<Project>) {
        let mut seen = HashSet::with_capacity(projects.len());
        self.projects = projects
            .into_iter()
            .filter(|p| {
                let first = seen.insert(p.id.clone());
                if !first {
                    tracing::warn!(id = %p.id, "dropping duplicate project id from snapshot");
                }
                first
            })
            .collect();
    }

    pub fn add(&mut self, draft: ProjectDraft, current_year: i32) -> Project {
        let project = draft.into_project(self.mint_id(), current_year);
        self.projects.insert(0, project.clone());
        project
    }

    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<Project, StoreError> {
        let project = self.find_mut(id)?;
        patch.apply_to(project);
        Ok(project.clone())
    }

    pub fn remove(&mut self, id: &str) -> Result<Project, StoreError> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.projects.remove(index))
    }

    /// Embeds the image and stores it as the project's image reference. On any
    /// error the project is left untouched.
    pub fn attach_image(
        &mut self,
        id: &str,
        bytes: &[u8],
        max_encoded_bytes: usize,
    ) -> Result<Project, StoreError> {
        self.find_mut(id)?;
        let embedded = embedded_image::embed(bytes, max_encoded_bytes)?;
        self.update(
            id,
            ProjectPatch {
                image_url: Some(embedded.into_string()),
                ..ProjectPatch::default()
            },
        )
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Project, StoreError> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn mint_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
