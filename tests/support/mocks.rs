// tests/support/mocks.rs
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use hireboard::application::dto::AuthenticatedUser;
use hireboard::application::error::ApplicationResult;
use hireboard::application::ports::{security::TokenAuthenticator, time::Clock};
use hireboard::domain::activity::{
    ActivityLogEntry, ActivityLogRepository, NewActivityLogEntry,
};
use hireboard::domain::errors::{DomainError, DomainResult};
use hireboard::domain::job::{Job, JobId, JobRepository, JobUpdate, NewJob};
use hireboard::domain::job_application::{
    ApplicationId, ApplicationSearch, ApplicationStatus, JobApplicationRecord,
    JobApplicationRepository,
};
use hireboard::domain::stats::{TopJobStat, TrendPoint};
use hireboard::domain::user::{Role, User, UserId, UserRepository};

fn day_key(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------- users

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn seed(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count_seekers(&self) -> DomainResult<u64> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| u.role != Role::Admin).count() as u64)
    }

    async fn count_seekers_since(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| u.role != Role::Admin && u.created_at >= cutoff)
            .count() as u64)
    }

    async fn registration_trend(&self, since: DateTime<Utc>) -> DomainResult<Vec<TrendPoint>> {
        let users = self.users.lock().unwrap();
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for user in users
            .iter()
            .filter(|u| u.role != Role::Admin && u.created_at >= since)
        {
            *buckets.entry(day_key(user.created_at)).or_default() += 1;
        }
        Ok(buckets
            .into_iter()
            .map(|(day, count)| TrendPoint { day, count })
            .collect())
    }

    async fn list_seekers(&self) -> DomainResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        let mut seekers: Vec<User> = users
            .iter()
            .filter(|u| u.role != Role::Admin)
            .cloned()
            .collect();
        seekers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(seekers)
    }
}

// ----------------------------------------------------------------- jobs

#[derive(Default)]
pub struct InMemoryJobRepo {
    jobs: Mutex<HashMap<i64, Job>>,
    next_id: AtomicI64,
}

impl InMemoryJobRepo {
    pub fn seed(&self, job: Job) {
        let id = i64::from(job.id);
        self.next_id.fetch_max(id, Ordering::SeqCst);
        self.jobs.lock().unwrap().insert(id, job);
    }

    pub fn get(&self, id: i64) -> Option<Job> {
        self.jobs.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepo {
    async fn insert(&self, job: NewJob) -> DomainResult<Job> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let job = Job {
            id: JobId::new(id)?,
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            category: job.category,
            salary: job.salary,
            deadline: job.deadline,
            job_type: job.job_type,
            featured: job.featured,
            created_by: job.created_by,
            created_at: now,
            updated_at: now,
        };
        self.jobs.lock().unwrap().insert(id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        Ok(self.jobs.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: JobUpdate) -> DomainResult<Job> {
        let mut jobs = self.jobs.lock().unwrap();
        let job = jobs
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        if let Some(title) = update.title {
            job.title = title;
        }
        if let Some(company) = update.company {
            job.company = company;
        }
        if let Some(location) = update.location {
            job.location = location;
        }
        if let Some(description) = update.description {
            job.description = description;
        }
        if let Some(category) = update.category {
            job.category = category;
        }
        if let Some(salary) = update.salary {
            job.salary = salary;
        }
        if let Some(deadline) = update.deadline {
            job.deadline = deadline;
        }
        if let Some(job_type) = update.job_type {
            job.job_type = job_type;
        }
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    async fn set_featured(&self, id: JobId, featured: bool) -> DomainResult<Job> {
        let mut jobs = self.jobs.lock().unwrap();
        let job = jobs
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;
        job.featured = featured;
        job.updated_at = Utc::now();
        Ok(job.clone())
    }

    async fn delete(&self, id: JobId) -> DomainResult<()> {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("job not found".into()))
    }

    async fn list_by_owner(&self, owner: UserId) -> DomainResult<Vec<Job>> {
        let jobs = self.jobs.lock().unwrap();
        let mut owned: Vec<Job> = jobs
            .values()
            .filter(|job| job.created_by == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn count_by_owner(&self, owner: UserId) -> DomainResult<u64> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.values().filter(|job| job.created_by == owner).count() as u64)
    }

    async fn count_active_by_owner(&self, owner: UserId, now: DateTime<Utc>) -> DomainResult<u64> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .values()
            .filter(|job| job.created_by == owner && job.is_active(now))
            .count() as u64)
    }

    async fn count_by_owner_since(
        &self,
        owner: UserId,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .values()
            .filter(|job| job.created_by == owner && job.created_at >= cutoff)
            .count() as u64)
    }
}

// ---------------------------------------------------------- applications

#[derive(Default)]
pub struct InMemoryApplicationRepo {
    records: Mutex<HashMap<i64, JobApplicationRecord>>,
}

impl InMemoryApplicationRepo {
    pub fn seed(&self, record: JobApplicationRecord) {
        self.records
            .lock()
            .unwrap()
            .insert(i64::from(record.application.id), record);
    }

    pub fn get(&self, id: i64) -> Option<JobApplicationRecord> {
        self.records.lock().unwrap().get(&id).cloned()
    }

    fn owned(&self, owner: UserId) -> Vec<JobApplicationRecord> {
        let records = self.records.lock().unwrap();
        let mut owned: Vec<JobApplicationRecord> = records
            .values()
            .filter(|record| record.job.owner == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.application.applied_at.cmp(&a.application.applied_at));
        owned
    }
}

#[async_trait]
impl JobApplicationRepository for InMemoryApplicationRepo {
    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplicationRecord>> {
        Ok(self.records.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_for_owner(&self, owner: UserId) -> DomainResult<Vec<JobApplicationRecord>> {
        Ok(self.owned(owner))
    }

    async fn search_for_owner(
        &self,
        owner: UserId,
        search: &ApplicationSearch,
    ) -> DomainResult<Vec<JobApplicationRecord>> {
        let mut out = self.owned(owner);
        if let Some(job_id) = search.job_id {
            out.retain(|record| record.application.job_id == job_id);
        }
        if !search.statuses.is_empty() {
            out.retain(|record| search.statuses.contains(&record.application.status));
        }
        if let Some(from) = search.applied_from {
            out.retain(|record| record.application.applied_at >= from);
        }
        if let Some(until) = search.applied_until {
            out.retain(|record| record.application.applied_at <= until);
        }
        Ok(out)
    }

    async fn list_for_job(&self, job_id: JobId) -> DomainResult<Vec<JobApplicationRecord>> {
        let records = self.records.lock().unwrap();
        let mut out: Vec<JobApplicationRecord> = records
            .values()
            .filter(|record| record.application.job_id == job_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.application.applied_at.cmp(&a.application.applied_at));
        Ok(out)
    }

    async fn find_many_by_ids(
        &self,
        ids: &[ApplicationId],
    ) -> DomainResult<Vec<JobApplicationRecord>> {
        let records = self.records.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| records.get(&i64::from(*id)).cloned())
            .collect())
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
        notes: &str,
    ) -> DomainResult<JobApplicationRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("application not found".into()))?;
        record.application.status = status;
        record.application.notes = notes.to_string();
        Ok(record.clone())
    }

    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> DomainResult<u64> {
        let mut records = self.records.lock().unwrap();
        let mut updated = 0;
        for id in ids {
            if let Some(record) = records.get_mut(&i64::from(*id)) {
                record.application.status = status;
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn delete(&self, id: ApplicationId) -> DomainResult<()> {
        let mut records = self.records.lock().unwrap();
        records
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("application not found".into()))
    }

    async fn count_for_owner(&self, owner: UserId) -> DomainResult<u64> {
        Ok(self.owned(owner).len() as u64)
    }

    async fn count_for_owner_since(
        &self,
        owner: UserId,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<u64> {
        Ok(self
            .owned(owner)
            .iter()
            .filter(|record| record.application.applied_at >= cutoff)
            .count() as u64)
    }

    async fn count_by_status(
        &self,
        owner: UserId,
        status: ApplicationStatus,
    ) -> DomainResult<u64> {
        Ok(self
            .owned(owner)
            .iter()
            .filter(|record| record.application.status == status)
            .count() as u64)
    }

    async fn application_trend(
        &self,
        owner: UserId,
        since: DateTime<Utc>,
    ) -> DomainResult<Vec<TrendPoint>> {
        let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
        for record in self
            .owned(owner)
            .iter()
            .filter(|record| record.application.applied_at >= since)
        {
            *buckets
                .entry(day_key(record.application.applied_at))
                .or_default() += 1;
        }
        Ok(buckets
            .into_iter()
            .map(|(day, count)| TrendPoint { day, count })
            .collect())
    }

    async fn top_jobs(&self, owner: UserId, limit: u32) -> DomainResult<Vec<TopJobStat>> {
        let mut by_job: HashMap<i64, (String, String, i64)> = HashMap::new();
        for record in self.owned(owner) {
            let entry = by_job
                .entry(i64::from(record.job.id))
                .or_insert_with(|| (record.job.title.clone(), record.job.company.clone(), 0));
            entry.2 += 1;
        }
        let mut ranked: Vec<(i64, (String, String, i64))> = by_job.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .2.cmp(&a.1 .2).then(a.0.cmp(&b.0)));
        ranked.truncate(limit as usize);
        Ok(ranked
            .into_iter()
            .map(|(_, (title, company, count))| TopJobStat {
                title,
                company,
                count,
            })
            .collect())
    }
}

// --------------------------------------------------------- activity log

#[derive(Default)]
pub struct RecordingActivityRepo {
    entries: Mutex<Vec<ActivityLogEntry>>,
    next_id: AtomicI64,
}

impl RecordingActivityRepo {
    pub fn entries(&self) -> Vec<ActivityLogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn seed(&self, entry: ActivityLogEntry) {
        self.next_id.fetch_max(entry.id, Ordering::SeqCst);
        self.entries.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl ActivityLogRepository for RecordingActivityRepo {
    async fn insert(&self, entry: NewActivityLogEntry) -> DomainResult<()> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.entries.lock().unwrap().push(ActivityLogEntry {
            id,
            admin_id: entry.admin_id,
            action: entry.action.as_str().to_string(),
            target_type: entry.target_type.as_str().to_string(),
            target_id: entry.target_id,
            details: entry.details,
            ip: entry.ip,
            user_agent: entry.user_agent,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_by_admin(
        &self,
        admin: UserId,
        limit: u32,
    ) -> DomainResult<Vec<ActivityLogEntry>> {
        let entries = self.entries.lock().unwrap();
        let mut out: Vec<ActivityLogEntry> = entries
            .iter()
            .filter(|entry| entry.admin_id == admin)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out.truncate(limit as usize);
        Ok(out)
    }
}

/// Insert always fails. Commands must still succeed against this repo.
#[derive(Default)]
pub struct FailingActivityRepo;

#[async_trait]
impl ActivityLogRepository for FailingActivityRepo {
    async fn insert(&self, _entry: NewActivityLogEntry) -> DomainResult<()> {
        Err(DomainError::Persistence("activity store unavailable".into()))
    }

    async fn list_by_admin(
        &self,
        _admin: UserId,
        _limit: u32,
    ) -> DomainResult<Vec<ActivityLogEntry>> {
        Err(DomainError::Persistence("activity store unavailable".into()))
    }
}

// ---------------------------------------------------------------- ports

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct StaticAuthenticator(pub AuthenticatedUser);

#[async_trait]
impl TokenAuthenticator for StaticAuthenticator {
    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Ok(self.0)
    }
}
