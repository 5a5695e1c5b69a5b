//! Device inventory repository.

use chrono::Utc;

use sentinel_core::entities::{Device, NewDevice};

use crate::error::DatabaseError;
use crate::helpers::{get_port, parse_datetime};
use crate::service::SentinelService;

const SELECT_COLS: &str = "id, hostname, ip, username, password, port, platform, created_at";

fn row_to_device(row: &libsql::Row) -> Result<Device, DatabaseError> {
    Ok(Device {
        id: row.get(0)?,
        hostname: row.get(1)?,
        ip: row.get(2)?,
        username: row.get(3)?,
        password: row.get(4)?,
        port: get_port(row, 5)?,
        platform: row.get(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl SentinelService {
    pub async fn add_device(&self, new: &NewDevice) -> Result<Device, DatabaseError> {
        new.validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO devices (hostname, ip, username, password, port, platform, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    new.hostname.as_str(),
                    new.ip.as_str(),
                    new.username.as_str(),
                    new.password.as_str(),
                    i64::from(new.port),
                    new.platform.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();
        tracing::info!(id, hostname = %new.hostname, ip = %new.ip, "device added");

        Ok(Device {
            id,
            hostname: new.hostname.clone(),
            ip: new.ip.clone(),
            username: new.username.clone(),
            password: new.password.clone(),
            port: new.port,
            platform: new.platform.clone(),
            created_at: now,
        })
    }

    pub async fn get_device(&self, id: i64) -> Result<Device, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM devices WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { entity: "device", id })?;
        row_to_device(&row)
    }

    /// All inventory entries, oldest first.
    pub async fn list_devices(&self) -> Result<Vec<Device>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM devices ORDER BY id"), ())
            .await?;

        let mut devices = Vec::new();
        while let Some(row) = rows.next().await? {
            devices.push(row_to_device(&row)?);
        }
        Ok(devices)
    }

    pub async fn delete_device(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM devices WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { entity: "device", id });
        }
        tracing::info!(id, "device removed");
        Ok(())
    }
}
