use bson::doc;
use futures::TryStreamExt;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::store::MongoStore;
use crate::prelude::Result;

#[async_trait::async_trait]
pub trait JobSelector {
    async fn get_all(&self) -> Result<Vec<JobEntry>>;

    /// Highest `score` first, at most `limit` entries.
    async fn get_top_scored(&self, limit: i64) -> Result<Vec<JobEntry>>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait::async_trait]
impl JobSelector for MongoStore {
    async fn get_all(&self) -> Result<Vec<JobEntry>> {
        let rows = self
            .jobs()
            .find(doc! {})
            .await?
            .try_collect::<Vec<_>>()
            .await?;
        Ok(rows)
    }

    async fn get_top_scored(&self, limit: i64) -> Result<Vec<JobEntry>> {
        let rows = self
            .jobs()
            .find(doc! {})
            .sort(doc! { "score": -1 })
            .limit(limit)
            .await?
            .try_collect::<Vec<_>>()
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.jobs().count_documents(doc! {}).await?)
    }
}
