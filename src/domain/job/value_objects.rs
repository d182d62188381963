// src/domain/job/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl JobId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("job id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<JobId> for i64 {
    fn from(value: JobId) -> Self {
        value.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobCategory {
    #[serde(rename = "Full-time")]
    FullTime,
    Internship,
    Remote,
    Design,
    Marketing,
    Development,
    Sales,
    Finance,
    #[serde(rename = "HR")]
    Hr,
}

impl JobCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::FullTime => "Full-time",
            JobCategory::Internship => "Internship",
            JobCategory::Remote => "Remote",
            JobCategory::Design => "Design",
            JobCategory::Marketing => "Marketing",
            JobCategory::Development => "Development",
            JobCategory::Sales => "Sales",
            JobCategory::Finance => "Finance",
            JobCategory::Hr => "HR",
        }
    }
}

impl Default for JobCategory {
    fn default() -> Self {
        JobCategory::FullTime
    }
}

impl FromStr for JobCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Full-time" => Ok(JobCategory::FullTime),
            "Internship" => Ok(JobCategory::Internship),
            "Remote" => Ok(JobCategory::Remote),
            "Design" => Ok(JobCategory::Design),
            "Marketing" => Ok(JobCategory::Marketing),
            "Development" => Ok(JobCategory::Development),
            "Sales" => Ok(JobCategory::Sales),
            "Finance" => Ok(JobCategory::Finance),
            "HR" => Ok(JobCategory::Hr),
            other => Err(DomainError::Validation(format!(
                "unknown job category: {other}"
            ))),
        }
    }
}
