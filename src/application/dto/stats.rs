// src/application/dto/stats.rs
use crate::domain::stats::{TopJobStat, TrendPoint};
use serde::Serialize;

/// Headline numbers for the admin dashboard. `total_users` is platform-wide
/// by design; the other three are scoped to the querying admin's postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStatsDto {
    pub total_users: u64,
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicStatsDto {
    pub total_users: u64,
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
}

/// Four display buckets. "Under Review" applications count toward totals
/// but have no bucket here; the dashboard has always shown it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBreakdownDto {
    pub pending: u64,
    pub shortlisted: u64,
    pub rejected: u64,
    pub hired: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentStatsDto {
    pub new_users: u64,
    pub new_jobs: u64,
    pub new_applications: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvancedStatsDto {
    pub basic: BasicStatsDto,
    pub application_status: StatusBreakdownDto,
    pub recent: RecentStatsDto,
    pub trends: Vec<TrendPoint>,
    pub user_trends: Vec<TrendPoint>,
    pub top_jobs: Vec<TopJobStat>,
}
