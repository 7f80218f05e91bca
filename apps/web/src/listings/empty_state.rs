use serde::Serialize;

/// Filterable domains. Mentors are never filtered and have no empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Resources,
    Jobs,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Resources => "resources",
            Domain::Jobs => "jobs",
        }
    }

    fn guidance(&self) -> &'static str {
        match self {
            Domain::Resources => {
                "No resources found matching your criteria. Try selecting a different category."
            }
            Domain::Jobs => {
                "No jobs found matching your filters. Try adjusting your search criteria."
            }
        }
    }
}

/// Shown in place of a list when a filter leaves nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub heading: String,
    pub message: &'static str,
}

pub fn empty_state(domain: Domain) -> EmptyState {
    EmptyState {
        heading: format!("No {} found", domain.as_str()),
        message: domain.guidance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_empty_state() {
        let state = empty_state(Domain::Resources);
        assert_eq!(state.heading, "No resources found");
        assert!(state.message.contains("different category"));
    }

    #[test]
    fn test_job_empty_state() {
        let state = empty_state(Domain::Jobs);
        assert_eq!(state.heading, "No jobs found");
        assert!(state.message.contains("adjusting your search"));
    }
}
