//! Catalog filter pipeline: pure functions from (catalog, criteria) to a
//! filtered view. No HTML here; see `render` for the display adapter.

pub mod empty_state;
pub mod handlers;
pub mod jobs;
pub mod mentors;
pub mod resources;
pub mod salary;
pub mod selector;

use serde::Serialize;

use crate::listings::empty_state::{empty_state, Domain, EmptyState};

/// Outcome of a filter pass: either the surviving entries in catalog order,
/// or the empty-state payload for the domain.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Listing<T> {
    Items { items: Vec<T> },
    Empty { empty_state: EmptyState },
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>, domain: Domain) -> Self {
        if items.is_empty() {
            Listing::Empty {
                empty_state: empty_state(domain),
            }
        } else {
            Listing::Items { items }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items { items } => items,
            Listing::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty { .. })
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_items_become_empty_state() {
        let listing: Listing<u32> = Listing::from_items(vec![], Domain::Jobs);
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
        match listing {
            Listing::Empty { empty_state } => assert_eq!(empty_state.heading, "No jobs found"),
            Listing::Items { .. } => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_listing_serializes_with_status_tag() {
        let listing = Listing::from_items(vec![1u32, 2], Domain::Resources);
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["status"], "items");
        assert_eq!(json["items"], serde_json::json!([1, 2]));

        let empty: Listing<u32> = Listing::from_items(vec![], Domain::Resources);
        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["status"], "empty");
        assert_eq!(json["empty_state"]["heading"], "No resources found");
    }
}
