//! Repository for the `annotations` table.

use crate::models::annotation::{Annotation, AnnotationRecord, NewAnnotation};
use crate::DbPool;

/// Column list for annotations queries.
const COLUMNS: &str =
    "id, video_id, video_url, start_time, end_time, labels, notes, clip_filename";

/// Outcome of a whole-set replacement: how many items were inserted and how
/// many were skipped (per-item failures such as duplicate ids).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub inserted: usize,
    pub skipped: usize,
}

/// Provides list and whole-set-replace operations for annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// List all annotations ordered by start time descending.
    pub async fn list(pool: &DbPool) -> Result<Vec<AnnotationRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM annotations ORDER BY start_time DESC");
        let rows = sqlx::query_as::<_, Annotation>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(AnnotationRecord::from).collect())
    }

    /// Replace the entire annotation set: delete all rows, then insert each
    /// item individually.
    ///
    /// Insert failures are isolated per item: a duplicate id (including the
    /// predictable collision of two items deriving the same id) skips that
    /// item and the batch continues.
    pub async fn replace_all(
        pool: &DbPool,
        items: Vec<NewAnnotation>,
    ) -> Result<ReplaceOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM annotations")
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO annotations ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        );

        let mut outcome = ReplaceOutcome::default();
        for item in items {
            let result = sqlx::query(&query)
                .bind(&item.id)
                .bind(&item.video_id)
                .bind(&item.video_url)
                .bind(item.start_time)
                .bind(item.end_time)
                .bind(&item.labels)
                .bind(&item.notes)
                .bind(&item.clip_filename)
                .execute(&mut *tx)
                .await;

            match result {
                Ok(_) => outcome.inserted += 1,
                Err(err) => {
                    tracing::warn!(id = %item.id, error = %err, "Skipping annotation insert");
                    outcome.skipped += 1;
                }
            }
        }

        tx.commit().await?;
        Ok(outcome)
    }
}
