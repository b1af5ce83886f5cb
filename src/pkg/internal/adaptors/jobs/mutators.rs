use bson::{doc, Document};

use crate::pkg::internal::store::MongoStore;
use crate::prelude::Result;

/// Jobs are only ever written in bulk by the importer, so the mutator works
/// on raw documents rather than `JobEntry`.
#[async_trait::async_trait]
pub trait JobMutator {
    async fn delete_all(&self) -> Result<u64>;

    async fn insert_many(&self, docs: &[Document]) -> Result<usize>;

    async fn insert_one(&self, doc: &Document) -> Result<()>;
}

#[async_trait::async_trait]
impl JobMutator for MongoStore {
    async fn delete_all(&self) -> Result<u64> {
        let result = self.raw_jobs().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, docs: &[Document]) -> Result<usize> {
        if docs.is_empty() {
            return Ok(0);
        }
        let result = self.raw_jobs().insert_many(docs).await?;
        Ok(result.inserted_ids.len())
    }

    async fn insert_one(&self, doc: &Document) -> Result<()> {
        self.raw_jobs().insert_one(doc).await?;
        Ok(())
    }
}
