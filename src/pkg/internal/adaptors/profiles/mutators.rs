use bson::{doc, DateTime};

use crate::pkg::internal::adaptors::profiles::spec::ImageWrite;
use crate::pkg::internal::store::MongoStore;
use crate::prelude::Result;

#[async_trait::async_trait]
pub trait ProfileMutator {
    /// Creates the user's document on first upload, otherwise replaces the
    /// image and bumps `updatedAt`.
    async fn set_image(&self, user_id: &str, image: &str) -> Result<ImageWrite>;

    /// Unsets `profileImage` and keeps the document. Returns whether a
    /// document for `user_id` exists.
    async fn remove_image(&self, user_id: &str) -> Result<bool>;
}

#[async_trait::async_trait]
impl ProfileMutator for MongoStore {
    async fn set_image(&self, user_id: &str, image: &str) -> Result<ImageWrite> {
        let now = DateTime::now();
        let result = self
            .profiles()
            .update_one(
                doc! { "userId": user_id },
                doc! {
                    "$set": { "profileImage": image, "updatedAt": now },
                    "$setOnInsert": { "createdAt": now },
                },
            )
            .upsert(true)
            .await?;
        if result.upserted_id.is_some() {
            Ok(ImageWrite::Created)
        } else {
            Ok(ImageWrite::Updated)
        }
    }

    async fn remove_image(&self, user_id: &str) -> Result<bool> {
        let result = self
            .profiles()
            .update_one(
                doc! { "userId": user_id },
                doc! {
                    "$unset": { "profileImage": "" },
                    "$set": { "updatedAt": DateTime::now() },
                },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}
