// Shared test fixture for Project records.
// Compiled only under `cfg(test)` and reached through `crate::tests::fixtures`.

use crate::modules::portfolio::core::project::Project;

const PROJECT_JSON: &str = include_str!("json/project.json");

pub struct ProjectBuilder {
    inner: Project,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(PROJECT_JSON).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn image_url(mut self, v: impl Into<String>) -> Self {
        self.inner.image_url = v.into();
        self
    }

    pub fn year(mut self, v: impl Into<String>) -> Self {
        self.inner.year = v.into();
        self
    }

    pub fn build(self) -> Project {
        self.inner
    }
}

/// The two-project gallery used across gallery and save tests.
pub fn logo_and_poster() -> Vec<Project> {
    vec![
        ProjectBuilder::new()
            .id("p-logo")
            .title("Spice Route Mark")
            .category("Logo Design")
            .build(),
        ProjectBuilder::new()
            .id("p-poster")
            .title("Monsoon Festival")
            .category("Poster Design")
            .build(),
    ]
}

#[cfg(test)]
mod project_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProjectBuilder::default().build();
        assert_eq!(built.id, "1700000000000");
        assert_eq!(built.title, "Monsoon Festival");
        assert_eq!(built.category, "Poster Design");
        assert_eq!(built.year, "2023");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ProjectBuilder::new()
            .id("p-9")
            .title("t")
            .category("c")
            .description("d")
            .image_url("u")
            .year("1999")
            .build();
        assert_eq!(custom.id, "p-9");
        assert_eq!(custom.title, "t");
        assert_eq!(custom.category, "c");
        assert_eq!(custom.description, "d");
        assert_eq!(custom.image_url, "u");
        assert_eq!(custom.year, "1999");
    }
}
