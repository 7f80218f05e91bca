//! Axum route handlers for the catalog listings.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::listings::jobs::{job_filter_options, job_listing, JobCard, JobFilterOptions, JobFilters};
use crate::listings::mentors::mentor_listing;
use crate::listings::resources::{
    category_controls, resource_listing, CategoryControl, CategorySelector, ResourceCard,
};
use crate::listings::selector::{parse_selector, Selector};
use crate::listings::Listing;
use crate::models::job::ExperienceTier;
use crate::models::mentor::MentorProfile;
use crate::models::resource::ResourceCategory;
use crate::render::cards::{render_job_region, render_mentor_region, render_resource_region};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    pub category: Option<String>,
}

impl ResourceQuery {
    pub fn selector(&self) -> Result<CategorySelector, AppError> {
        parse_selector::<ResourceCategory>(self.category.as_deref())
            .map_err(|e| AppError::Validation(e.to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub industry: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
}

impl JobQuery {
    pub fn filters(&self) -> Result<JobFilters, AppError> {
        Ok(JobFilters {
            employment_type: text_selector(self.employment_type.as_deref()),
            industry: text_selector(self.industry.as_deref()),
            experience: parse_selector::<ExperienceTier>(self.experience.as_deref())
                .map_err(|e| AppError::Validation(e.to_string()))?,
            salary: parse_selector::<u64>(self.salary.as_deref()).map_err(|_| {
                AppError::Validation(format!(
                    "salary threshold '{}' is not a whole number",
                    self.salary.as_deref().unwrap_or_default()
                ))
            })?,
        })
    }
}

/// Free-text axes accept any value, so parsing cannot fail.
fn text_selector(raw: Option<&str>) -> Selector<String> {
    match parse_selector::<String>(raw) {
        Ok(selector) => selector,
        Err(never) => match never {},
    }
}

#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub category: CategorySelector,
    pub controls: Vec<CategoryControl>,
    pub listing: Listing<ResourceCard<'static>>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub filters: JobFilters,
    pub options: JobFilterOptions,
    pub listing: Listing<JobCard<'static>>,
}

#[derive(Debug, Serialize)]
pub struct MentorListResponse {
    pub mentors: &'static [MentorProfile],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resources
pub async fn handle_list_resources(
    State(state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<ResourceListResponse>, AppError> {
    let Query(query) = query?;
    let category = query.selector()?;
    let listing = resource_listing(state.catalog.resources, &category);
    debug!(%category, matched = listing.len(), "Filtered resources");

    Ok(Json(ResourceListResponse {
        controls: category_controls(&category),
        category,
        listing,
    }))
}

/// GET /api/v1/resources/fragment
///
/// Markup for the `resources-container` region.
pub async fn handle_resource_fragment(
    State(state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let category = query.selector()?;
    let listing = resource_listing(state.catalog.resources, &category);
    debug!(%category, matched = listing.len(), "Rendering resource region");
    Ok(Html(render_resource_region(&listing)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    query: Result<Query<JobQuery>, QueryRejection>,
) -> Result<Json<JobListResponse>, AppError> {
    let Query(query) = query?;
    let filters = query.filters()?;
    let listing = job_listing(state.catalog.jobs, &filters);
    debug!(?filters, matched = listing.len(), "Filtered jobs");

    Ok(Json(JobListResponse {
        options: job_filter_options(state.catalog.jobs),
        filters,
        listing,
    }))
}

/// GET /api/v1/jobs/fragment
///
/// Markup for the `jobs-container` region.
pub async fn handle_job_fragment(
    State(state): State<AppState>,
    query: Result<Query<JobQuery>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let Query(query) = query?;
    let filters = query.filters()?;
    let listing = job_listing(state.catalog.jobs, &filters);
    debug!(?filters, matched = listing.len(), "Rendering job region");
    Ok(Html(render_job_region(&listing)))
}

/// GET /api/v1/mentors
pub async fn handle_list_mentors(State(state): State<AppState>) -> Json<MentorListResponse> {
    Json(MentorListResponse {
        mentors: mentor_listing(state.catalog.mentors),
    })
}

/// GET /api/v1/mentors/fragment
pub async fn handle_mentor_fragment(State(state): State<AppState>) -> Html<String> {
    Html(render_mentor_region(mentor_listing(state.catalog.mentors)))
}
