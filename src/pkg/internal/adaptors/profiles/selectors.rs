use bson::doc;

use crate::pkg::internal::adaptors::profiles::spec::ProfileEntry;
use crate::pkg::internal::store::MongoStore;
use crate::prelude::Result;

#[async_trait::async_trait]
pub trait ProfileSelector {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<ProfileEntry>>;
}

#[async_trait::async_trait]
impl ProfileSelector for MongoStore {
    async fn get_by_user_id(&self, user_id: &str) -> Result<Option<ProfileEntry>> {
        let row = self
            .profiles()
            .find_one(doc! { "userId": user_id })
            .await?;
        Ok(row)
    }
}
