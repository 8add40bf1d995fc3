//! Persistence of analysis records.
//!
//! Carried in `AppState` as `Arc<dyn AnalysisStore>`; production uses Postgres.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, AnalysisRow};

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save(&self, record: &AnalysisRecord) -> Result<AnalysisRow, AppError>;

    /// Most recent records first.
    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRow>, AppError>;
}

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn save(&self, record: &AnalysisRecord) -> Result<AnalysisRow, AppError> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            INSERT INTO resume_analyses (id, filename, score, role, uploaded_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, filename, score, role, uploaded_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.filename)
        .bind(record.score)
        .bind(&record.role)
        .bind(record.uploaded_at)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved analysis {} ({} → {})", row.id, row.filename, row.score);
        Ok(row)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRow>, AppError> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            "SELECT id, filename, score, role, uploaded_at FROM resume_analyses ORDER BY uploaded_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// In-process store for handler tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryAnalysisStore {
    rows: std::sync::Mutex<Vec<AnalysisRow>>,
    pub fail: bool,
}

#[cfg(test)]
impl MemoryAnalysisStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<AnalysisRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl AnalysisStore for MemoryAnalysisStore {
    async fn save(&self, record: &AnalysisRecord) -> Result<AnalysisRow, AppError> {
        if self.fail {
            return Err(AppError::Internal(anyhow::anyhow!("store unavailable")));
        }
        let row = AnalysisRow {
            id: Uuid::new_v4(),
            filename: record.filename.clone(),
            score: record.score,
            role: record.role.clone(),
            uploaded_at: record.uploaded_at,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRow>, AppError> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
