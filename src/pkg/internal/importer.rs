use std::{collections::HashMap, fs::File, io::Read, path::Path};

use bson::Document;

use crate::{
    pkg::internal::{
        adaptors::jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{DEFAULT_COMPANY, DEFAULT_LINK, DEFAULT_LOCATION, DEFAULT_TITLE, DEFAULT_UPLOADED},
        },
        store::Store,
    },
    prelude::{Error, Result},
};

const COMPANY_COLUMN: &str = "company";
const SCRAPER_ORDER_COLUMN: &str = "web-scraper-order";
const MISSING_MARKERS: [&str; 7] = ["nan", "null", "none", "na", "n/a", "#n/a", "<na>"];

/// Cleaned rows ready to be written, plus how many rows the source held.
#[derive(Debug)]
pub struct ImportBatch {
    pub rows_read: usize,
    pub documents: Vec<Document>,
}

#[derive(Debug)]
pub struct FailedRow {
    pub index: usize,
    pub title: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct ImportReport {
    pub rows_read: usize,
    pub rows_cleaned: usize,
    pub removed: u64,
    pub inserted: usize,
    pub failures: Vec<FailedRow>,
    pub verified: u64,
}

pub fn read_file(path: &Path) -> Result<ImportBatch> {
    let file = File::open(path)?;
    read_csv(file)
}

pub fn read_csv<R: Read>(reader: R) -> Result<ImportBatch> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?;
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::BadRequest("no columns to parse from file".into()));
    }
    let columns = normalize_headers(headers.iter());

    let mut rows_read = 0;
    let mut documents = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows_read += 1;
        let cells: Vec<String> = (0..columns.len())
            .map(|i| clean_cell(record.get(i).unwrap_or("")))
            .collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue;
        }
        let mut row = Document::new();
        for (column, cell) in columns.iter().zip(cells) {
            if let Some(name) = column {
                row.insert(name.as_str(), cell);
            }
        }
        documents.push(fill_defaults(row));
    }
    tracing::debug!(
        "read {} rows, kept {} after cleaning",
        rows_read,
        documents.len()
    );
    Ok(ImportBatch {
        rows_read,
        documents,
    })
}

/// Trimmed cell text, with missing-value markers collapsed to "".
pub fn clean_cell(raw: &str) -> String {
    let cell = raw.trim();
    if MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        return String::new();
    }
    cell.to_string()
}

/// Maps source headers to document keys; `None` marks a dropped column.
/// Repeated names get `.1`, `.2`, ... suffixes so no cell is overwritten.
fn normalize_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<Option<String>> {
    let mut columns: Vec<Option<String>> = headers
        .map(|h| h.trim().trim_start_matches('\u{feff}').to_string())
        .map(|h| (!h.eq_ignore_ascii_case(SCRAPER_ORDER_COLUMN)).then_some(h))
        .collect();
    let has_company = columns
        .iter()
        .any(|c| c.as_deref() == Some(COMPANY_COLUMN));
    if !has_company {
        if let Some(column) = columns
            .iter_mut()
            .flatten()
            .find(|c| c.eq_ignore_ascii_case(COMPANY_COLUMN))
        {
            *column = COMPANY_COLUMN.to_string();
        }
    }
    let mut seen: HashMap<String, usize> = HashMap::new();
    for column in columns.iter_mut().flatten() {
        let count = seen.entry(column.clone()).or_insert(0);
        if *count > 0 {
            let renamed = format!("{}.{}", column, count);
            tracing::warn!("duplicate column {} renamed to {}", column, &renamed);
            *column = renamed;
        }
        *count += 1;
    }
    columns
}

fn fill_defaults(mut row: Document) -> Document {
    for (field, default) in [
        ("Title", DEFAULT_TITLE),
        ("company", DEFAULT_COMPANY),
        ("location", DEFAULT_LOCATION),
        ("uploaded", DEFAULT_UPLOADED),
        ("link", DEFAULT_LINK),
    ] {
        if !row.contains_key(field) {
            row.insert(field, default);
        }
    }
    row.insert("score", 0_i64);
    row
}

/// Wipes the jobs collection and loads `batch` in its place. A rejected bulk
/// insert is retried one document at a time.
pub async fn replace_jobs<S>(store: &S, batch: ImportBatch) -> Result<ImportReport>
where
    S: Store + ?Sized,
{
    let ImportBatch {
        rows_read,
        documents,
    } = batch;

    let removed = store.delete_all().await?;
    tracing::info!("removed {} existing jobs", removed);

    let (inserted, failures) = match store.insert_many(&documents).await {
        Ok(inserted) => (inserted, Vec::new()),
        Err(e) => {
            tracing::warn!("bulk insert failed, inserting one by one: {}", &e);
            let partial = store.delete_all().await?;
            tracing::debug!("cleared {} jobs left by the failed bulk insert", partial);
            insert_each(store, &documents).await
        }
    };
    tracing::info!("inserted {} of {} jobs", inserted, documents.len());

    let verified = store.count().await?;
    Ok(ImportReport {
        rows_read,
        rows_cleaned: documents.len(),
        removed,
        inserted,
        failures,
        verified,
    })
}

async fn insert_each<S>(store: &S, documents: &[Document]) -> (usize, Vec<FailedRow>)
where
    S: Store + ?Sized,
{
    let mut inserted = 0;
    let mut failures = Vec::new();
    for (index, document) in documents.iter().enumerate() {
        match store.insert_one(document).await {
            Ok(()) => inserted += 1,
            Err(e) => {
                let title = document.get_str("Title").unwrap_or(DEFAULT_TITLE).to_string();
                tracing::error!("failed to insert row {} ({}): {}", index, &title, &e);
                failures.push(FailedRow {
                    index,
                    title,
                    reason: e.to_string(),
                });
            }
        }
    }
    (inserted, failures)
}
