// src/domain/job_application/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub i64);

impl ApplicationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "application id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ApplicationId> for i64 {
    fn from(value: ApplicationId) -> Self {
        value.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pipeline state of an application. Serialized with the exact display
/// strings the frontend and the stored rows use ("Under Review", not
/// "UnderReview").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    #[serde(rename = "Under Review")]
    UnderReview,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Pending
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pending" => Ok(ApplicationStatus::Pending),
            "Under Review" => Ok(ApplicationStatus::UnderReview),
            "Shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            "Hired" => Ok(ApplicationStatus::Hired),
            other => Err(DomainError::Validation(format!("invalid status: {other}"))),
        }
    }
}
