//! Label model.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Label {
    pub id: i64,
    pub name: String,
}
