use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::portfolio::core::gallery::{self, ALL};
use crate::modules::portfolio::core::project::Project;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub id: ID,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub year: String,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: ID(p.id),
            title: p.title,
            category: p.category,
            description: p.description,
            image_url: p.image_url,
            year: p.year,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Projects in display order, narrowed to `category` unless it is omitted or "All".
    async fn gallery(
        &self,
        context: &Context<'_>,
        category: Option<String>,
    ) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let guard = state.portfolio.read().await;
        let active = category.as_deref().unwrap_or(ALL);
        Ok(gallery::filter(guard.store.projects(), active)
            .into_iter()
            .cloned()
            .map(GqlProject::from)
            .collect())
    }

    async fn categories(&self, context: &Context<'_>) -> GqlResult<Vec<String>> {
        let state = context.data_unchecked::<AppState>();
        let guard = state.portfolio.read().await;
        Ok(gallery::categories(guard.store.projects()))
    }

    async fn project(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let guard = state.portfolio.read().await;
        Ok(guard.store.get(&id).cloned().map(GqlProject::from))
    }
}
