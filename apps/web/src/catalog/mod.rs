//! Static catalogs compiled into the binary. Nothing here is mutated at runtime;
//! only filtered views over these slices change.

pub mod jobs;
pub mod mentors;
pub mod resources;
pub mod stats;

use std::collections::HashSet;

use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::listings::salary::parse_minimum_salary;
use crate::models::job::JobPosting;
use crate::models::mentor::MentorProfile;
use crate::models::resource::Resource;
use crate::models::stat::SiteStat;

/// Number of mentor profiles the mentors region is laid out for.
pub const MENTOR_COUNT: usize = 6;

/// Borrowed view of every catalog. Handlers receive this through `AppState`
/// so tests can swap in their own slices.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub resources: &'static [Resource],
    pub jobs: &'static [JobPosting],
    pub mentors: &'static [MentorProfile],
    pub stats: &'static [SiteStat],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            resources: resources::RESOURCES,
            jobs: jobs::JOBS,
            mentors: mentors::MENTORS,
            stats: stats::STATS,
        }
    }

    /// Startup integrity check. Structural problems abort startup; salary
    /// strings without a readable minimum only warn, since the salary filter
    /// treats them as zero.
    pub fn validate(&self) -> Result<()> {
        if self.resources.is_empty() {
            bail!("resource catalog is empty");
        }
        if self.jobs.is_empty() {
            bail!("job catalog is empty");
        }
        if self.mentors.len() != MENTOR_COUNT {
            bail!(
                "mentor catalog must hold {MENTOR_COUNT} profiles, found {}",
                self.mentors.len()
            );
        }

        ensure_unique_ids("resource", self.resources.iter().map(|r| r.id))?;
        ensure_unique_ids("job", self.jobs.iter().map(|j| j.id))?;
        ensure_unique_ids("mentor", self.mentors.iter().map(|m| m.id))?;

        for job in self.jobs {
            if parse_minimum_salary(job.salary).is_none() {
                warn!(
                    job_id = job.id,
                    salary = job.salary,
                    "Salary range has no readable minimum; treated as 0 when filtering"
                );
            }
        }

        info!(
            resources = self.resources.len(),
            jobs = self.jobs.len(),
            mentors = self.mentors.len(),
            stats = self.stats.len(),
            "Catalogs loaded"
        );
        Ok(())
    }
}

fn ensure_unique_ids(kind: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {kind} id {id}");
        }
    }
    Ok(())
}
