use serde::Serialize;

/// A headline number in the statistics region, animated up from zero.
#[derive(Debug, Clone, Serialize)]
pub struct SiteStat {
    pub key: &'static str,
    pub label: &'static str,
    pub target: u64,
}
