//! Card and region markup. Each `render_*_region` returns the complete
//! contents of its container; callers replace the region wholesale.

use crate::listings::empty_state::EmptyState;
use crate::listings::jobs::JobCard;
use crate::listings::resources::ResourceCard;
use crate::listings::Listing;
use crate::models::mentor::MentorProfile;
use crate::render::escape_html;

pub fn render_empty_state(state: &EmptyState) -> String {
    format!(
        r#"<div class="no-results">
    <div class="no-results-icon"><i class="fas fa-search"></i></div>
    <h3>{heading}</h3>
    <p>{message}</p>
</div>
"#,
        heading = escape_html(&state.heading),
        message = escape_html(state.message),
    )
}

pub fn render_resource_card(card: &ResourceCard<'_>) -> String {
    let resource = card.resource;
    format!(
        r#"<div class="resource-card" data-id="{id}">
    <div class="resource-header">
        <span class="resource-category">{label}</span>
        <span class="resource-badge {badge_class}">{badge}</span>
    </div>
    <h3 class="resource-title">{title}</h3>
    <p class="resource-description">{description}</p>
    <div class="resource-meta">
        <span class="resource-meta-item"><i class="fas fa-signal"></i> {level}</span>
        <span class="resource-meta-item"><i class="far fa-clock"></i> {duration}</span>
    </div>
    <button class="btn btn-primary btn-block">
        <i class="fas fa-{icon}"></i> {cta}
    </button>
</div>
"#,
        id = resource.id,
        label = escape_html(card.category_label),
        badge_class = card.badge.class,
        badge = card.badge.label,
        title = escape_html(resource.title),
        description = escape_html(resource.description),
        level = escape_html(resource.level),
        duration = escape_html(resource.duration),
        icon = card.call_to_action.icon,
        cta = card.call_to_action.label,
    )
}

pub fn render_job_card(card: &JobCard<'_>) -> String {
    let job = card.job;
    format!(
        r#"<div class="job-card" data-id="{id}">
    <div class="job-header">
        <span class="job-type">{employment_type}</span>
        <span class="job-date">{posted}</span>
    </div>
    <h3 class="job-title">{title}</h3>
    <div class="job-company">
        <i class="fas fa-building"></i> <span>{company}</span>
        <i class="fas fa-map-marker-alt"></i> <span>{location}</span>
    </div>
    <p class="job-description">{description}</p>
    <div class="job-footer">
        <span class="job-salary">{salary}</span>
        <button class="btn btn-primary"><i class="fas fa-paper-plane"></i> Apply Now</button>
    </div>
</div>
"#,
        id = job.id,
        employment_type = escape_html(job.employment_type),
        posted = escape_html(job.posted),
        title = escape_html(job.title),
        company = escape_html(job.company),
        location = escape_html(job.location),
        description = escape_html(job.description),
        salary = escape_html(job.salary),
    )
}

pub fn render_mentor_card(mentor: &MentorProfile) -> String {
    format!(
        r#"<div class="mentor-card" data-id="{id}">
    <div class="mentor-avatar {avatar}"><i class="fas fa-user"></i></div>
    <h3 class="mentor-name">{name}</h3>
    <p class="mentor-role">{role}</p>
    <div class="mentor-expertise"><span class="expertise-tag">{expertise}</span></div>
    <p class="mentor-bio">{bio}</p>
    <button class="btn btn-primary btn-block"><i class="fas fa-handshake"></i> Connect</button>
</div>
"#,
        id = mentor.id,
        avatar = mentor.avatar.css_class(),
        name = escape_html(mentor.name),
        role = escape_html(mentor.role),
        expertise = escape_html(mentor.expertise),
        bio = escape_html(mentor.bio),
    )
}

pub fn render_resource_region(listing: &Listing<ResourceCard<'_>>) -> String {
    render_region(listing, render_resource_card)
}

pub fn render_job_region(listing: &Listing<JobCard<'_>>) -> String {
    render_region(listing, render_job_card)
}

pub fn render_mentor_region(mentors: &[MentorProfile]) -> String {
    mentors.iter().map(render_mentor_card).collect()
}

fn render_region<T>(listing: &Listing<T>, render_card: impl Fn(&T) -> String) -> String {
    match listing {
        Listing::Items { items } => items.iter().map(render_card).collect(),
        Listing::Empty { empty_state } => render_empty_state(empty_state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::jobs::JOBS;
    use crate::catalog::mentors::MENTORS;
    use crate::catalog::resources::RESOURCES;
    use crate::listings::jobs::{job_listing, JobFilters};
    use crate::listings::resources::{resource_card, resource_listing};
    use crate::listings::selector::Selector;
    use crate::models::resource::ResourceCategory;

    #[test]
    fn test_resource_region_has_one_card_per_match() {
        let listing = resource_listing(RESOURCES, &Selector::Only(ResourceCategory::Tech));
        let html = render_resource_region(&listing);
        assert_eq!(html.matches(r#"class="resource-card""#).count(), 2);
        assert!(html.contains("AI &amp; Machine Learning Fundamentals"));
        assert!(html.contains("Unlock Premium"));
        assert!(html.contains("Start Learning"));
        assert!(!html.contains("no-results"));
    }

    #[test]
    fn test_resource_card_markup() {
        let html = render_resource_card(&resource_card(&RESOURCES[3]));
        assert!(html.contains(r#"<span class="resource-category">Career Dev</span>"#));
        assert!(html.contains(r#"<span class="resource-badge badge-free">Free</span>"#));
        assert!(html.contains("fa-play-circle"));
    }

    #[test]
    fn test_empty_job_region_renders_empty_state() {
        let filters = JobFilters {
            salary: Selector::Only(1_000_000),
            ..JobFilters::default()
        };
        let html = render_job_region(&job_listing(JOBS, &filters));
        assert!(html.contains(r#"<div class="no-results">"#));
        assert!(html.contains("<h3>No jobs found</h3>"));
        assert!(!html.contains("job-card"));
    }

    #[test]
    fn test_job_region_preserves_catalog_order() {
        let html = render_job_region(&job_listing(JOBS, &JobFilters::show_all()));
        let first = html.find("Senior Frontend Engineer").unwrap();
        let last = html.find("DevOps Engineer").unwrap();
        assert!(first < last);
        assert_eq!(html.matches("Apply Now").count(), JOBS.len());
    }

    #[test]
    fn test_mentor_region_renders_all_six() {
        let html = render_mentor_region(MENTORS);
        assert_eq!(html.matches(r#"class="mentor-card""#).count(), 6);
        assert!(html.contains("mentor-avatar avatar-green"));
        assert!(html.contains("Startups &amp; VC"));
    }
}
