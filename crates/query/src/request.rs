use serde::Deserialize;

use crate::resolver::MetricFilter;

/// A metrics query as it arrives from a transport, before validation.
///
/// Optional on every field so malformed requests can be represented and
/// rejected with a typed error instead of being silently defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRequest {
    pub year: Option<i32>,
    pub state_id: Option<String>,
    pub city_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `year` is mandatory for metric queries.
    MissingYear,
    /// Boundary type was neither `STATE` nor `CITY`.
    UnknownBoundaryKind(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::MissingYear => write!(f, "metrics query requires a year"),
            QueryError::UnknownBoundaryKind(kind) => {
                write!(f, "unknown boundary type: {kind}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl MetricsRequest {
    pub fn validate(self) -> Result<MetricFilter, QueryError> {
        let year = self.year.ok_or(QueryError::MissingYear)?;
        Ok(MetricFilter {
            year,
            state_id: self.state_id,
            city_id: self.city_id,
        })
    }
}
