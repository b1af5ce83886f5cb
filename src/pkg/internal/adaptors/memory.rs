use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use bson::{oid::ObjectId, Document};
use chrono::Utc;

use crate::pkg::internal::adaptors::{
    jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
    profiles::{
        mutators::ProfileMutator,
        selectors::ProfileSelector,
        spec::{ImageWrite, ProfileEntry},
    },
};
use crate::prelude::{Error, Result};

/// In-process stand-in for the document store.
#[derive(Default)]
pub struct MemoryStore {
    jobs: Mutex<Vec<Document>>,
    profiles: Mutex<Vec<ProfileEntry>>,
    offline: AtomicBool,
    fail_bulk_after: Mutex<Option<usize>>,
    rejected_title: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the server were unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn fail_bulk_inserts(&self) {
        self.fail_bulk_inserts_after(0);
    }

    /// Bulk inserts keep the first `saved` documents, then fail, the way an
    /// ordered `insert_many` stops at the first bad write.
    pub fn fail_bulk_inserts_after(&self, saved: usize) {
        *self.fail_bulk_after.lock().unwrap() = Some(saved);
    }

    /// Single inserts of a document with this `Title` fail.
    pub fn reject_title(&self, title: &str) {
        *self.rejected_title.lock().unwrap() = Some(title.to_string());
    }

    pub fn seed_jobs(&self, docs: Vec<Document>) {
        self.jobs.lock().unwrap().extend(docs.into_iter().map(with_id));
    }

    pub fn job_documents(&self) -> Vec<Document> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::Store("server selection timeout".into()));
        }
        Ok(())
    }
}

fn with_id(mut doc: Document) -> Document {
    if !doc.contains_key("_id") {
        doc.insert("_id", ObjectId::new());
    }
    doc
}

fn score_of(doc: &Document) -> i64 {
    doc.get_i64("score")
        .or_else(|_| doc.get_i32("score").map(i64::from))
        .unwrap_or(0)
}

#[async_trait::async_trait]
impl JobSelector for MemoryStore {
    async fn get_all(&self) -> Result<Vec<JobEntry>> {
        self.check()?;
        let jobs = self.jobs.lock().unwrap().clone();
        jobs.into_iter()
            .map(|d| bson::from_document(d).map_err(Error::from))
            .collect()
    }

    async fn get_top_scored(&self, limit: i64) -> Result<Vec<JobEntry>> {
        self.check()?;
        let mut jobs = self.jobs.lock().unwrap().clone();
        jobs.sort_by_key(|d| std::cmp::Reverse(score_of(d)));
        jobs.into_iter()
            .take(limit.max(0) as usize)
            .map(|d| bson::from_document(d).map_err(Error::from))
            .collect()
    }

    async fn count(&self) -> Result<u64> {
        self.check()?;
        Ok(self.jobs.lock().unwrap().len() as u64)
    }
}

#[async_trait::async_trait]
impl JobMutator for MemoryStore {
    async fn delete_all(&self) -> Result<u64> {
        self.check()?;
        let mut jobs = self.jobs.lock().unwrap();
        let removed = jobs.len() as u64;
        jobs.clear();
        Ok(removed)
    }

    async fn insert_many(&self, docs: &[Document]) -> Result<usize> {
        self.check()?;
        let mut jobs = self.jobs.lock().unwrap();
        if let Some(saved) = *self.fail_bulk_after.lock().unwrap() {
            jobs.extend(docs.iter().take(saved).cloned().map(with_id));
            return Err(Error::Store("bulk write rejected".into()));
        }
        jobs.extend(docs.iter().cloned().map(with_id));
        Ok(docs.len())
    }

    async fn insert_one(&self, doc: &Document) -> Result<()> {
        self.check()?;
        let rejected = self.rejected_title.lock().unwrap().clone();
        if let (Some(rejected), Ok(title)) = (rejected, doc.get_str("Title")) {
            if rejected == title {
                return Err(Error::Store(format!("document {} rejected", title)));
            }
        }
        self.jobs.lock().unwrap().push(with_id(doc.clone()));
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileSelector for MemoryStore {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<ProfileEntry>> {
        self.check()?;
        let profiles = self.profiles.lock().unwrap();
        Ok(profiles.iter().find(|p| p.user_id == user_id).cloned())
    }
}

#[async_trait::async_trait]
impl ProfileMutator for MemoryStore {
    async fn set_image(&self, user_id: &str, image: &str) -> Result<ImageWrite> {
        self.check()?;
        let now = Utc::now();
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.user_id == user_id) {
            Some(profile) => {
                profile.profile_image = Some(image.to_string());
                profile.updated_at = now;
                Ok(ImageWrite::Updated)
            }
            None => {
                profiles.push(ProfileEntry {
                    id: Some(ObjectId::new()),
                    user_id: user_id.to_string(),
                    profile_image: Some(image.to_string()),
                    created_at: now,
                    updated_at: now,
                });
                Ok(ImageWrite::Created)
            }
        }
    }

    async fn remove_image(&self, user_id: &str) -> Result<bool> {
        self.check()?;
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.user_id == user_id) {
            Some(profile) => {
                profile.profile_image = None;
                profile.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
