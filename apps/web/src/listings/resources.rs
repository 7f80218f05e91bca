//! Resource catalog filtering by category.

use serde::Serialize;

use crate::listings::empty_state::Domain;
use crate::listings::selector::{Selector, ALL};
use crate::listings::Listing;
use crate::models::resource::{format_category, Resource, ResourceCategory};

pub type CategorySelector = Selector<ResourceCategory>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub class: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub icon: &'static str,
}

/// A resource plus the derived display fields its card needs.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceCard<'a> {
    #[serde(flatten)]
    pub resource: &'a Resource,
    pub category_label: &'static str,
    pub badge: Badge,
    pub call_to_action: CallToAction,
}

/// One category button. Exactly one control in a set is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryControl {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Entries whose category matches, in catalog order. `All` keeps everything.
pub fn filter_resources<'a>(catalog: &'a [Resource], selector: &CategorySelector) -> Vec<&'a Resource> {
    catalog
        .iter()
        .filter(|r| selector.admits(&r.category))
        .collect()
}

pub fn resource_card(resource: &Resource) -> ResourceCard<'_> {
    let (badge, call_to_action) = if resource.is_free {
        (
            Badge {
                class: "badge-free",
                label: "Free",
            },
            CallToAction {
                label: "Start Learning",
                icon: "play-circle",
            },
        )
    } else {
        (
            Badge {
                class: "badge-premium",
                label: "Premium",
            },
            CallToAction {
                label: "Unlock Premium",
                icon: "lock",
            },
        )
    };

    ResourceCard {
        resource,
        category_label: resource.category.label(),
        badge,
        call_to_action,
    }
}

pub fn resource_listing<'a>(
    catalog: &'a [Resource],
    selector: &CategorySelector,
) -> Listing<ResourceCard<'a>> {
    let cards = filter_resources(catalog, selector)
        .into_iter()
        .map(resource_card)
        .collect();
    Listing::from_items(cards, Domain::Resources)
}

/// The `all` control followed by one control per category.
pub fn category_controls(selector: &CategorySelector) -> Vec<CategoryControl> {
    let all = CategoryControl {
        key: ALL,
        label: "All",
        active: selector.is_all(),
    };
    std::iter::once(all)
        .chain(ResourceCategory::ALL.iter().map(|category| CategoryControl {
            key: category.as_str(),
            label: format_category(category.as_str()),
            active: selector.value() == Some(category),
        }))
        .collect()
}
