// tests/tenant_scoping_tests.rs
mod support;

use hireboard::application::commands::jobs::UpdateJobCommand;
use hireboard::application::commands::applications::UpdateStatusCommand;
use hireboard::application::error::ApplicationError;
use hireboard::domain::job_application::ApplicationStatus;
use support::{admin, application, harness, job, non_admin, origin, seeker};

fn rename(id: i64) -> UpdateJobCommand {
    UpdateJobCommand {
        id,
        title: Some("Renamed".into()),
        company: None,
        location: None,
        description: None,
        category: None,
        salary: None,
        deadline: None,
        job_type: None,
    }
}

#[tokio::test]
async fn job_mutations_require_ownership() {
    let h = harness();
    h.jobs.seed(job(10, 2, "Backend Engineer"));

    let err = h
        .services
        .job_commands
        .update_job(&admin(1), rename(10), &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = h
        .services
        .job_commands
        .delete_job(&admin(1), 10, &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = h
        .services
        .job_commands
        .toggle_featured(&admin(1), 10, &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    // nothing changed
    assert_eq!(h.jobs.get(10).unwrap().title, "Backend Engineer");
}

#[tokio::test]
async fn missing_job_reports_not_found_not_forbidden() {
    let h = harness();

    let err = h
        .services
        .job_commands
        .update_job(&admin(1), rename(999), &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = h
        .services
        .job_commands
        .delete_job(&admin(1), 999, &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn owned_job_can_be_updated() {
    let h = harness();
    h.jobs.seed(job(10, 1, "Backend Engineer"));

    let updated = h
        .services
        .job_commands
        .update_job(&admin(1), rename(10), &origin())
        .await
        .unwrap();
    assert_eq!(updated.title, "Renamed");
}

#[tokio::test]
async fn application_ownership_resolves_through_parent_job() {
    let h = harness();
    let mine = job(10, 1, "Backend Engineer");
    let theirs = job(20, 2, "Frontend Engineer");
    let applicant = seeker(50, "Ada Lovelace");
    h.jobs.seed(mine.clone());
    h.jobs.seed(theirs.clone());
    h.applications
        .seed(application(100, &mine, &applicant, ApplicationStatus::Pending));
    h.applications
        .seed(application(200, &theirs, &applicant, ApplicationStatus::Pending));

    let command = UpdateStatusCommand {
        id: 200,
        status: ApplicationStatus::Shortlisted,
        notes: None,
    };
    let err = h
        .services
        .application_commands
        .update_status(&admin(1), command, &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let command = UpdateStatusCommand {
        id: 999,
        status: ApplicationStatus::Shortlisted,
        notes: None,
    };
    let err = h
        .services
        .application_commands
        .update_status(&admin(1), command, &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let command = UpdateStatusCommand {
        id: 100,
        status: ApplicationStatus::Shortlisted,
        notes: Some("strong CV".into()),
    };
    let updated = h
        .services
        .application_commands
        .update_status(&admin(1), command, &origin())
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Shortlisted);
    assert_eq!(updated.notes, "strong CV");
}

#[tokio::test]
async fn listings_are_scoped_to_the_caller() {
    let h = harness();
    let mine = job(10, 1, "Backend Engineer");
    let theirs = job(20, 2, "Frontend Engineer");
    let applicant = seeker(50, "Ada Lovelace");
    h.jobs.seed(mine.clone());
    h.jobs.seed(theirs.clone());
    h.applications
        .seed(application(100, &mine, &applicant, ApplicationStatus::Pending));
    h.applications
        .seed(application(200, &theirs, &applicant, ApplicationStatus::Pending));

    let jobs = h
        .services
        .job_queries
        .list_owned_jobs(&admin(1))
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, 10);

    let applications = h
        .services
        .application_queries
        .list_applications(&admin(1))
        .await
        .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].id, 100);
}

#[tokio::test]
async fn non_admin_callers_are_rejected() {
    let h = harness();
    h.jobs.seed(job(10, 3, "Backend Engineer"));

    let err = h
        .services
        .job_queries
        .list_owned_jobs(&non_admin(3))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let err = h
        .services
        .job_commands
        .delete_job(&non_admin(3), 10, &origin())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}
