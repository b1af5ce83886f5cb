use std::path::Path;

use crate::{
    conf::settings,
    pkg::internal::{importer, store::MongoStore},
    prelude::Result,
};

pub async fn apply(path: &Path) -> Result<()> {
    let batch = importer::read_file(path)?;
    println!("CSV data loaded successfully!");

    let store = MongoStore::connect(
        &settings.database_url,
        &settings.database_name,
        &settings.jobs_collection,
        &settings.profiles_collection,
    )
    .await?;
    tracing::debug!("connected to db");

    let report = importer::replace_jobs(&store, batch).await?;
    println!("Rows read:         {}", report.rows_read);
    println!("Rows after clean:  {}", report.rows_cleaned);
    println!("Removed existing:  {}", report.removed);
    println!("Inserted:          {}", report.inserted);
    for failure in &report.failures {
        println!(
            "Failed row {} ({}): {}",
            failure.index, failure.title, failure.reason
        );
    }
    println!("Jobs in collection: {}", report.verified);
    if report.verified != report.inserted as u64 {
        tracing::warn!(
            "collection holds {} jobs after inserting {}",
            report.verified,
            report.inserted
        );
    }
    Ok(())
}
