//! Inspection history repository: atomic batch writes and task retrieval.

use chrono::Utc;

use sentinel_core::constants::{
    EMPTY_AI_JSON, FAILED_SCORE, REPORT_DEVICE_IP, REPORT_DEVICE_NAME, RISK_COUNT_NOT_COMPUTED,
};
use sentinel_core::entities::{InspectionDetail, InspectionTask};
use sentinel_core::enums::DetailStatus;
use sentinel_core::outcome::{AnalysisResult, DeviceOutcome};

use crate::error::DatabaseError;
use crate::helpers::{get_u32, parse_datetime, parse_enum, parse_json};
use crate::service::SentinelService;

const TASK_COLS: &str = "id, task_time, total_devices, risk_count, avg_score, model_used";
const DETAIL_COLS: &str =
    "id, task_id, device_name, device_ip, raw_log, ai_json, score, status";

const INSERT_DETAIL: &str = "INSERT INTO inspection_details \
     (task_id, device_name, device_ip, raw_log, ai_json, score, status) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

fn row_to_task(row: &libsql::Row) -> Result<InspectionTask, DatabaseError> {
    Ok(InspectionTask {
        id: row.get(0)?,
        task_time: parse_datetime(&row.get::<String>(1)?)?,
        total_devices: get_u32(row, 2)?,
        risk_count: get_u32(row, 3)?,
        avg_score: get_u32(row, 4)?,
        model_used: row.get(5)?,
    })
}

fn row_to_detail(row: &libsql::Row) -> Result<InspectionDetail, DatabaseError> {
    Ok(InspectionDetail {
        id: row.get(0)?,
        task_id: row.get(1)?,
        device_name: row.get(2)?,
        device_ip: row.get(3)?,
        raw_log: row.get(4)?,
        ai_json: parse_json(&row.get::<String>(5)?)?,
        score: get_u32(row, 6)?,
        status: parse_enum::<DetailStatus>(&row.get::<String>(7)?)?,
    })
}

impl SentinelService {
    /// Persist one batch run: a task row, the reserved report row, and one row
    /// per device outcome, all in a single transaction.
    ///
    /// Either every row becomes visible or none does. Returns the new task id
    /// after the transaction has committed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails; the transaction is rolled
    /// back before returning.
    pub async fn save_batch(
        &self,
        outcomes: &[DeviceOutcome],
        analysis: &AnalysisResult,
        model: &str,
    ) -> Result<i64, DatabaseError> {
        let total = u32::try_from(outcomes.len())
            .map_err(|_| DatabaseError::InvalidState("too many devices in batch".into()))?;
        let report_json = serde_json::to_string(analysis)
            .map_err(|e| DatabaseError::Other(e.into()))?;

        let tx = self.db().conn().transaction().await?;
        let written = async {
            tx.execute(
                "INSERT INTO inspection_tasks \
                 (task_time, total_devices, risk_count, avg_score, model_used) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    Utc::now().to_rfc3339(),
                    i64::from(total),
                    i64::from(RISK_COUNT_NOT_COMPUTED),
                    i64::from(analysis.placeholder_score()),
                    model
                ],
            )
            .await?;
            let task_id = tx.last_insert_rowid();

            tx.execute(
                INSERT_DETAIL,
                libsql::params![
                    task_id,
                    REPORT_DEVICE_NAME,
                    REPORT_DEVICE_IP,
                    "",
                    report_json.as_str(),
                    i64::from(analysis.placeholder_score()),
                    analysis.status.as_str()
                ],
            )
            .await?;

            for entry in outcomes {
                tx.execute(
                    INSERT_DETAIL,
                    libsql::params![
                        task_id,
                        entry.device.hostname.as_str(),
                        entry.device.ip.as_str(),
                        entry.outcome.raw_log(),
                        EMPTY_AI_JSON,
                        i64::from(FAILED_SCORE),
                        entry.outcome.device_status().as_str()
                    ],
                )
                .await?;
            }
            Ok::<i64, DatabaseError>(task_id)
        }
        .await;

        match written {
            Ok(task_id) => {
                tx.commit().await?;
                tracing::info!(
                    task_id,
                    total_devices = total,
                    analysis = %analysis.status,
                    "inspection batch saved"
                );
                Ok(task_id)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::error!(%rollback_error, "rollback of failed batch failed");
                }
                tracing::warn!(%error, "inspection batch not saved");
                Err(error)
            }
        }
    }

    pub async fn get_task(&self, task_id: i64) -> Result<InspectionTask, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TASK_COLS} FROM inspection_tasks WHERE id = ?1"),
                [task_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: "task",
            id: task_id,
        })?;
        row_to_task(&row)
    }

    /// Load a task and every detail row written with it, in insertion order.
    ///
    /// Read-only; repeated calls return identical data.
    pub async fn load_task(
        &self,
        task_id: i64,
    ) -> Result<(InspectionTask, Vec<InspectionDetail>), DatabaseError> {
        let task = self.get_task(task_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {DETAIL_COLS} FROM inspection_details WHERE task_id = ?1 ORDER BY id"
                ),
                [task_id],
            )
            .await?;

        let mut details = Vec::new();
        while let Some(row) = rows.next().await? {
            details.push(row_to_detail(&row)?);
        }
        Ok((task, details))
    }

    /// Most recent tasks first.
    pub async fn list_tasks(&self, limit: u32) -> Result<Vec<InspectionTask>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {TASK_COLS} FROM inspection_tasks ORDER BY id DESC LIMIT ?1"),
                [i64::from(limit)],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }
}
