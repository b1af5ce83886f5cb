use bson::{doc, Document};
use mongodb::{options::IndexOptions, Client, Collection, IndexModel};

use crate::{
    pkg::internal::adaptors::{
        jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
        profiles::{mutators::ProfileMutator, selectors::ProfileSelector, spec::ProfileEntry},
    },
    prelude::Result,
};

/// Everything the importer and the api need from the document store.
pub trait Store: JobSelector + JobMutator + ProfileSelector + ProfileMutator + Send + Sync {}

impl<T> Store for T where T: JobSelector + JobMutator + ProfileSelector + ProfileMutator + Send + Sync {}

#[derive(Debug, Clone)]
pub struct MongoStore {
    jobs: Collection<Document>,
    profiles: Collection<ProfileEntry>,
}

impl MongoStore {
    pub async fn connect(
        url: &str,
        database: &str,
        jobs_collection: &str,
        profiles_collection: &str,
    ) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(database);
        Ok(MongoStore {
            jobs: db.collection(jobs_collection),
            profiles: db.collection(profiles_collection),
        })
    }

    /// One profile document per user.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.profiles.create_index(index).await?;
        Ok(())
    }

    pub(crate) fn jobs(&self) -> Collection<JobEntry> {
        self.jobs.clone_with_type()
    }

    pub(crate) fn raw_jobs(&self) -> &Collection<Document> {
        &self.jobs
    }

    pub(crate) fn profiles(&self) -> &Collection<ProfileEntry> {
        &self.profiles
    }
}
