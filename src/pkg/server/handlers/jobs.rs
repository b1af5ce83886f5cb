use axum::{Json, extract::State};
use serde::Serialize;
use url::form_urlencoded::byte_serialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::{selectors::JobSelector, spec::JobEntry},
        server::state::AppState,
    },
    prelude::Result,
};

pub const FEATURED_LIMIT: i64 = 5;

/// Job card shape the landing page carousel renders.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedJob {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub logo: String,
    pub link: String,
    pub score: i64,
}

impl From<JobEntry> for FeaturedJob {
    fn from(job: JobEntry) -> Self {
        let description = format!(
            "Join {} in {}. Apply now to learn more about this opportunity.",
            &job.company, &job.location
        );
        FeaturedJob {
            id: job.id.map(|id| id.to_hex()).unwrap_or_default(),
            logo: avatar_url(&job.company),
            description,
            title: job.title,
            company: job.company,
            location: job.location,
            posted_date: job.uploaded,
            job_type: "Full-time".to_string(),
            salary: "Competitive".to_string(),
            link: job.link,
            score: job.score,
        }
    }
}

pub fn avatar_url(company: &str) -> String {
    let name: String = byte_serialize(company.as_bytes()).collect();
    format!("https://ui-avatars.com/api/?name={}&background=6366f1&color=fff", name)
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let jobs = state.store.get_all().await?;
    tracing::debug!("listing {} jobs", jobs.len());
    Ok(Json(jobs))
}

pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<FeaturedJob>>> {
    let jobs = state.store.get_top_scored(FEATURED_LIMIT).await?;
    Ok(Json(jobs.into_iter().map(FeaturedJob::from).collect()))
}
