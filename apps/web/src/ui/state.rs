use serde::Serialize;

use crate::listings::jobs::JobFilters;
use crate::listings::resources::CategorySelector;
use crate::ui::theme::Theme;

/// Everything about one visitor's view that is not catalog data. Built fresh
/// for each request and passed by value into the page renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub theme: Theme,
    pub resource_category: CategorySelector,
    pub job_filters: JobFilters,
}

impl UiState {
    pub fn new(theme: Theme, resource_category: CategorySelector, job_filters: JobFilters) -> Self {
        Self {
            theme,
            resource_category,
            job_filters,
        }
    }
}
