//! Job board filtering: four independent axes combined with AND.

use itertools::Itertools;
use serde::Serialize;

use crate::listings::empty_state::Domain;
use crate::listings::salary::{meets_threshold, minimum_salary, salary_options, SalaryOption};
use crate::listings::selector::Selector;
use crate::listings::Listing;
use crate::models::job::{ExperienceTier, JobPosting};

/// Current state of the job filter form. `Default` is the "show all" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobFilters {
    #[serde(rename = "type")]
    pub employment_type: Selector<String>,
    pub industry: Selector<String>,
    pub experience: Selector<ExperienceTier>,
    pub salary: Selector<u64>,
}

impl JobFilters {
    pub fn show_all() -> Self {
        Self::default()
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        self.employment_type.admits(job.employment_type)
            && self.industry.admits(job.industry)
            && self.experience.admits(&job.experience)
            && match self.salary {
                Selector::All => true,
                Selector::Only(threshold) => meets_threshold(job.salary, threshold),
            }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobCard<'a> {
    #[serde(flatten)]
    pub job: &'a JobPosting,
    pub experience_label: &'static str,
    pub minimum_salary: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Choices for the four filter controls, not counting the `all` entry each
/// control starts with.
#[derive(Debug, Clone, Serialize)]
pub struct JobFilterOptions {
    pub types: Vec<&'static str>,
    pub industries: Vec<&'static str>,
    pub experience: Vec<ExperienceOption>,
    pub salary: Vec<SalaryOption>,
}

pub fn filter_jobs<'a>(catalog: &'a [JobPosting], filters: &JobFilters) -> Vec<&'a JobPosting> {
    catalog.iter().filter(|job| filters.matches(job)).collect()
}

pub fn job_card(job: &JobPosting) -> JobCard<'_> {
    JobCard {
        job,
        experience_label: job.experience.label(),
        minimum_salary: minimum_salary(job.salary),
    }
}

pub fn job_listing<'a>(catalog: &'a [JobPosting], filters: &JobFilters) -> Listing<JobCard<'a>> {
    let cards = filter_jobs(catalog, filters).into_iter().map(job_card).collect();
    Listing::from_items(cards, Domain::Jobs)
}

pub fn job_filter_options(catalog: &[JobPosting]) -> JobFilterOptions {
    JobFilterOptions {
        types: catalog.iter().map(|j| j.employment_type).unique().collect(),
        industries: catalog.iter().map(|j| j.industry).unique().collect(),
        experience: ExperienceTier::ALL
            .iter()
            .map(|tier| ExperienceOption {
                value: tier.as_str(),
                label: tier.label(),
            })
            .collect(),
        salary: salary_options(),
    }
}
