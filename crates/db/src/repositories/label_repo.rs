//! Repository for the `labels` table.

use crate::models::label::Label;
use crate::DbPool;

/// Provides list and whole-set-replace operations for labels.
pub struct LabelRepo;

impl LabelRepo {
    /// List all label names, most recently added first.
    pub async fn list(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Label>("SELECT id, name FROM labels ORDER BY id DESC")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.name).collect())
    }

    /// Replace the entire label set: delete all rows, then insert the given
    /// names in order, trimmed, skipping names that are empty after trimming.
    ///
    /// Duplicates are inserted as-is; the set is last-writer-wins across
    /// concurrent replacements. Returns the number of rows inserted.
    pub async fn replace_all(pool: &DbPool, names: &[String]) -> Result<usize, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM labels").execute(&mut *tx).await?;

        let mut inserted = 0;
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            sqlx::query("INSERT INTO labels (name) VALUES (?)")
                .bind(name)
                .execute(&mut *tx)
                .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
