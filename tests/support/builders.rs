// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use hireboard::domain::job::{Job, JobCategory, JobId};
use hireboard::domain::job_application::{
    ApplicantInfo, ApplicationId, ApplicationStatus, JobApplication, JobApplicationRecord,
    JobSummary,
};
use hireboard::domain::user::{Role, User, UserId};

/// Fixed reference instant so date-sensitive assertions stay stable.
pub static BASE_TIME: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2026-03-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

pub fn days_ago(days: i64) -> DateTime<Utc> {
    *BASE_TIME - Duration::days(days)
}

pub fn seeker(id: i64, name: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        name: name.to_string(),
        username: name.to_lowercase().replace(' ', "_"),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role: Role::User,
        created_at: *BASE_TIME,
    }
}

pub fn job(id: i64, owner: i64, title: &str) -> Job {
    Job {
        id: JobId::new(id).unwrap(),
        title: title.to_string(),
        company: "Acme Corp".to_string(),
        location: "Berlin".to_string(),
        description: "A role".to_string(),
        category: JobCategory::Development,
        salary: "60k".to_string(),
        deadline: None,
        job_type: "Full-time".to_string(),
        featured: false,
        created_by: UserId::new(owner).unwrap(),
        created_at: *BASE_TIME,
        updated_at: *BASE_TIME,
    }
}

pub fn application(
    id: i64,
    parent: &Job,
    applicant: &User,
    status: ApplicationStatus,
) -> JobApplicationRecord {
    JobApplicationRecord {
        application: JobApplication {
            id: ApplicationId::new(id).unwrap(),
            applicant_id: applicant.id,
            job_id: parent.id,
            status,
            full_name: applicant.name.clone(),
            email: applicant.email.clone(),
            phone: "555-0100".to_string(),
            resume: "resume.pdf".to_string(),
            experience: "3 years".to_string(),
            skills: "Rust, SQL".to_string(),
            cover_letter: String::new(),
            notes: String::new(),
            applied_at: *BASE_TIME,
        },
        applicant: ApplicantInfo {
            id: applicant.id,
            name: applicant.name.clone(),
            email: applicant.email.clone(),
            username: applicant.username.clone(),
        },
        job: JobSummary {
            id: parent.id,
            title: parent.title.clone(),
            company: parent.company.clone(),
            job_type: parent.job_type.clone(),
            category: parent.category,
            owner: parent.created_by,
        },
    }
}
