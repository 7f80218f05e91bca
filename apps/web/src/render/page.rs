//! Full-page document. Filter controls are plain GET forms so the page works
//! without client-side scripting; each form carries the other form's state in
//! hidden inputs.

use crate::catalog::Catalog;
use crate::listings::jobs::{job_filter_options, job_listing, JobFilters};
use crate::listings::mentors::mentor_listing;
use crate::listings::resources::{category_controls, resource_listing, CategorySelector};
use crate::listings::selector::{Selector, ALL};
use crate::render::cards::{render_job_region, render_mentor_region, render_resource_region};
use crate::render::escape_html;
use crate::ui::counter::format_thousands;
use crate::ui::state::UiState;

pub fn render_page(state: &UiState, catalog: &Catalog) -> String {
    let theme = state.theme;
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>EmpowerHer Connect</title>
</head>
<body>
<nav class="navbar">
    <a class="logo" href="/">EmpowerHer Connect</a>
    <form method="post" action="/theme">
{theme_inputs}        <button id="themeToggle" class="theme-toggle" type="submit" aria-label="Toggle theme">
            <i class="{icon}"></i>
        </button>
    </form>
</nav>
<section class="stats" id="stats" data-stream="/api/v1/stats/stream">
{stats}</section>
<section id="resources">
    <h2>Learning Resources</h2>
{resource_form}    <div id="resources-container" class="resources-grid">
{resources}    </div>
{view_all_resources}</section>
<section id="jobs">
    <h2>Career Opportunities</h2>
{job_form}    <div id="jobs-container" class="jobs-grid">
{jobs}    </div>
{view_all_jobs}</section>
<section id="mentors">
    <h2>Meet Our Mentors</h2>
    <div id="mentors-container" class="mentors-grid">
{mentors}    </div>
</section>
</body>
</html>
"#,
        theme = theme.as_str(),
        icon = theme.icon_class(),
        theme_inputs = active_filter_inputs(&state.resource_category, &state.job_filters),
        stats = render_stats(catalog),
        resource_form = render_resource_form(&state.resource_category, &state.job_filters),
        resources = render_resource_region(&resource_listing(
            catalog.resources,
            &state.resource_category
        )),
        view_all_resources = render_view_all_resources(&state.job_filters),
        job_form = render_job_form(catalog, &state.resource_category, &state.job_filters),
        jobs = render_job_region(&job_listing(catalog.jobs, &state.job_filters)),
        view_all_jobs = render_view_all_jobs(&state.resource_category),
        mentors = render_mentor_region(mentor_listing(catalog.mentors)),
    )
}

fn render_stats(catalog: &Catalog) -> String {
    catalog
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"    <div class="stat" data-key="{key}">
        <span class="stat-number" data-target="{target}">{display}</span>
        <span class="stat-label">{label}</span>
    </div>
"#,
                key = escape_html(stat.key),
                target = stat.target,
                label = escape_html(stat.label),
                display = format_thousands(stat.target),
            )
        })
        .collect()
}

/// Category buttons. Exactly one carries the `active` class.
fn render_resource_form(category: &CategorySelector, jobs: &JobFilters) -> String {
    let buttons: String = category_controls(category)
        .iter()
        .map(|control| {
            format!(
                r#"        <button type="submit" name="category" value="{key}" class="category-btn{active}" data-category="{key}">{label}</button>
"#,
                key = control.key,
                active = if control.active { " active" } else { "" },
                label = escape_html(control.label),
            )
        })
        .collect();

    format!(
        r##"    <form class="resource-categories" method="get" action="/#resources">
{hidden}{buttons}    </form>
"##,
        hidden = job_hidden_inputs(jobs),
    )
}

fn render_view_all_resources(jobs: &JobFilters) -> String {
    format!(
        r##"    <form method="get" action="/#resources">
{hidden}        <button id="view-all-resources" class="btn btn-secondary" type="submit" name="category" value="{ALL}">View All Resources</button>
    </form>
"##,
        hidden = job_hidden_inputs(jobs),
    )
}

fn render_job_form(catalog: &Catalog, category: &CategorySelector, filters: &JobFilters) -> String {
    let options = job_filter_options(catalog.jobs);

    let types = select(
        "type",
        "job-type-filter",
        "All Types",
        options.types.iter().map(|t| (t.to_string(), t.to_string())),
        &filters.employment_type,
    );
    let industries = select(
        "industry",
        "industry-filter",
        "All Industries",
        options.industries.iter().map(|i| (i.to_string(), i.to_string())),
        &filters.industry,
    );
    let experience = select(
        "experience",
        "experience-filter",
        "All Levels",
        options
            .experience
            .iter()
            .map(|e| (e.value.to_string(), e.label.to_string())),
        &filters.experience,
    );
    let salary = select(
        "salary",
        "salary-filter",
        "Any Salary",
        options
            .salary
            .iter()
            .map(|s| (s.value.to_string(), s.label.clone())),
        &filters.salary,
    );

    format!(
        r##"    <form class="job-filters" method="get" action="/#jobs">
        <input type="hidden" name="category" value="{category}">
{types}{industries}{experience}{salary}        <button type="submit" class="btn btn-primary">Apply Filters</button>
    </form>
"##,
        category = escape_html(&category.to_string()),
    )
}

fn render_view_all_jobs(category: &CategorySelector) -> String {
    format!(
        r##"    <form method="get" action="/#jobs">
        <input type="hidden" name="category" value="{category}">
{reset}        <button id="view-all-jobs" class="btn btn-secondary" type="submit">View All Jobs</button>
    </form>
"##,
        category = escape_html(&category.to_string()),
        reset = job_hidden_inputs(&JobFilters::show_all()),
    )
}

/// Hidden inputs for every filter axis not set to `all`.
fn active_filter_inputs(category: &CategorySelector, filters: &JobFilters) -> String {
    [
        ("category", category.value().map(|c| c.to_string())),
        ("type", filters.employment_type.value().cloned()),
        ("industry", filters.industry.value().cloned()),
        ("experience", filters.experience.value().map(|e| e.to_string())),
        ("salary", filters.salary.value().map(|s| s.to_string())),
    ]
    .iter()
    .filter_map(|(name, value)| value.as_deref().map(|value| hidden_input(name, value)))
    .collect()
}

fn hidden_input(name: &str, value: &str) -> String {
    format!(
        "        <input type=\"hidden\" name=\"{name}\" value=\"{value}\">\n",
        value = escape_html(value)
    )
}

fn job_hidden_inputs(filters: &JobFilters) -> String {
    [
        ("type", filters.employment_type.to_string()),
        ("industry", filters.industry.to_string()),
        ("experience", filters.experience.to_string()),
        ("salary", filters.salary.to_string()),
    ]
    .iter()
    .map(|(name, value)| hidden_input(name, value))
    .collect()
}

/// A `<select>` whose first option is `all`; `current` decides which option
/// is marked `selected`.
fn select<T: std::fmt::Display>(
    name: &str,
    id: &str,
    all_label: &str,
    choices: impl Iterator<Item = (String, String)>,
    current: &Selector<T>,
) -> String {
    let current = current.to_string();
    let mut out = format!(
        "        <select name=\"{name}\" id=\"{id}\" class=\"modern-select\">\n            <option value=\"{ALL}\"{selected}>{all_label}</option>\n",
        selected = selected_attr(current == ALL),
    );
    for (value, label) in choices {
        out.push_str(&format!(
            "            <option value=\"{value}\"{selected}>{label}</option>\n",
            selected = selected_attr(value == current),
            value = escape_html(&value),
            label = escape_html(&label),
        ));
    }
    out.push_str("        </select>\n");
    out
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}
