use std::sync::Arc;

use dataset::{City, Dataset, MetricPoint, State};

/// Exact-match predicates applied to the metric series.
///
/// `year` is mandatory; the optional predicates are independent and combined
/// as an AND. An absent predicate means "no constraint", never "match
/// nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricFilter {
    pub year: i32,
    pub state_id: Option<String>,
    pub city_id: Option<String>,
}

impl MetricFilter {
    pub fn year(year: i32) -> Self {
        Self {
            year,
            state_id: None,
            city_id: None,
        }
    }

    fn matches(&self, point: &MetricPoint) -> bool {
        if point.year != self.year {
            return false;
        }
        if let Some(state_id) = &self.state_id
            && point.state_id != *state_id
        {
            return false;
        }
        if let Some(city_id) = &self.city_id
            && point.city_id != *city_id
        {
            return false;
        }
        true
    }
}

/// Read-only query surface over a shared dataset.
///
/// Holds a process-scoped handle constructed once at startup; every call is
/// synchronous and pure, so a resolver can be shared or cloned freely.
///
/// Ordering contract: every list query returns results in dataset load order.
#[derive(Debug, Clone)]
pub struct Resolver {
    data: Arc<Dataset>,
}

impl Resolver {
    pub fn new(data: Arc<Dataset>) -> Self {
        Self { data }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    /// All states, in load order. Infallible once the store is loaded.
    pub fn states(&self) -> &[State] {
        &self.data.states
    }

    /// Cities belonging to `state_id`. An unknown id yields an empty list,
    /// not an error.
    pub fn cities(&self, state_id: &str) -> Vec<&City> {
        self.data
            .cities
            .iter()
            .filter(|c| c.state_id == state_id)
            .collect()
    }

    /// Metric points matching `filter`, in load order.
    pub fn metrics(&self, filter: &MetricFilter) -> Vec<&MetricPoint> {
        self.data
            .metrics
            .iter()
            .filter(|m| filter.matches(m))
            .collect()
    }
}
