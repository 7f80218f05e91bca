use anyhow::Context;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::listings::handlers::{JobQuery, ResourceQuery};
use crate::render::page::render_page;
use crate::state::AppState;
use crate::ui::state::UiState;
use crate::ui::theme::theme_from_jar;

/// Query string of the page: both filter forms submit here, and the theme
/// form posts the same fields so the toggle can send the visitor back to the
/// view they were on.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

impl PageQuery {
    /// Page URL carrying these filters, e.g. `/?category=tech&industry=Design`.
    pub fn page_location(&self) -> Result<String, AppError> {
        let query = serde_urlencoded::to_string(self).context("Failed to encode page query")?;
        if query.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(format!("/?{query}"))
        }
    }

    pub fn into_ui_state(self, jar: &CookieJar, state: &AppState) -> Result<UiState, AppError> {
        let resource_category = ResourceQuery {
            category: self.category,
        }
        .selector()?;
        let job_filters = JobQuery {
            employment_type: self.employment_type,
            industry: self.industry,
            experience: self.experience,
            salary: self.salary,
        }
        .filters()?;

        Ok(UiState::new(
            theme_from_jar(jar, state.config.default_theme),
            resource_category,
            job_filters,
        ))
    }
}

/// GET /
pub async fn handle_page(
    State(state): State<AppState>,
    jar: CookieJar,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let ui = query.into_ui_state(&jar, &state)?;
    debug!(theme = %ui.theme, category = %ui.resource_category, "Rendering page");
    Ok(Html(render_page(&ui, &state.catalog)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_locates_bare_page() {
        assert_eq!(PageQuery::default().page_location().unwrap(), "/");
    }

    #[test]
    fn test_location_keeps_set_filters_only() {
        let query = PageQuery {
            category: Some("tech".to_string()),
            industry: Some("Design & Arts".to_string()),
            ..PageQuery::default()
        };
        assert_eq!(
            query.page_location().unwrap(),
            "/?category=tech&industry=Design+%26+Arts"
        );
    }
}
