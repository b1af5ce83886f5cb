use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled Job";
pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_UPLOADED: &str = "Recently";
pub const DEFAULT_LINK: &str = "#";

/// A job listing as persisted by the importer. Source columns beyond these
/// are kept in the store but not surfaced by the api.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobEntry {
    #[serde(rename = "_id", default, skip_serializing)]
    pub id: Option<ObjectId>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub uploaded: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub score: i64,
}
