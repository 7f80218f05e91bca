use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Query value meaning "no constraint on this axis".
pub const ALL: &str = "all";

/// One filter axis: either the `all` sentinel or a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T> Selector<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selector::All => None,
            Selector::Only(v) => Some(v),
        }
    }

    /// Equality predicate for this axis. `All` admits everything.
    pub fn admits<V>(&self, candidate: &V) -> bool
    where
        V: ?Sized + PartialEq,
        T: Borrow<V>,
    {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted.borrow() == candidate,
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL),
            Selector::Only(v) => v.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses an optional query parameter. Missing or blank values mean `all`.
pub fn parse_selector<T: FromStr>(raw: Option<&str>) -> Result<Selector<T>, T::Err> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Selector::All),
        Some(s) => s.parse(),
    }
}
