// src/domain/stats.rs
use serde::Serialize;

/// One bucket of a time series. `day` is a UTC calendar day formatted as
/// `YYYY-MM-DD`; series are sparse, so consumers must not assume contiguous
/// days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub day: String,
    pub count: i64,
}

/// A job ranked by how many applications it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopJobStat {
    pub title: String,
    pub company: String,
    pub count: i64,
}
