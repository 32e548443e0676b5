//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use glamora_core::{
    DomainError, RepoResult, Report, ReportDetails, ReportQuery, ReportRepository, Restriction,
    Snowflake,
};

use crate::models::{ReportDetailsModel, ReportModel};

use super::error::{map_db_error, map_foreign_key_violation};

const REPORT_COLUMNS: &str = "r.id, r.reporter_id, r.reported_user_id, r.marketplace_item_id, \
     r.reason, r.description, r.status, r.admin_notes, r.resolved_by, r.resolved_at, \
     r.created_at, r.updated_at";

#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>> {
        sqlx::query_as::<_, ReportModel>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports r WHERE r.id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .map(Report::try_from)
        .transpose()
    }

    #[instrument(skip(self), fields(report_id = %report.id))]
    async fn create(&self, report: &Report) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reports (id, reporter_id, reported_user_id, marketplace_item_id, reason,
                                 description, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.reporter_id.into_inner())
        .bind(report.reported_user_id.into_inner())
        .bind(report.marketplace_item_id.map(Snowflake::into_inner))
        .bind(&report.reason)
        .bind(&report.description)
        .bind(report.status.as_str())
        .bind(report.created_at)
        .bind(report.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::UserNotFound(report.reported_user_id))
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(report_id = %report.id))]
    async fn update(&self, report: &Report) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reports
            SET status = $2, admin_notes = $3, resolved_by = $4, resolved_at = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.status.as_str())
        .bind(&report.admin_notes)
        .bind(report.resolved_by.map(Snowflake::into_inner))
        .bind(report.resolved_at)
        .bind(report.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReportNotFound(report.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ReportQuery) -> RepoResult<(Vec<ReportDetails>, i64)> {
        let status = query.status.map(|s| s.as_str());

        let rows = sqlx::query_as::<_, ReportDetailsModel>(&format!(
            r"
            SELECT {REPORT_COLUMNS},
                   rp.name AS reporter_name, rp.email AS reporter_email,
                   ru.name AS reported_name, ru.email AS reported_email,
                   mi.name AS item_name, mi.description AS item_description
            FROM reports r
            LEFT JOIN users rp ON rp.id = r.reporter_id
            LEFT JOIN users ru ON ru.id = r.reported_user_id
            LEFT JOIN marketplace_items mi ON mi.id = r.marketplace_item_id
            WHERE ($1::TEXT IS NULL OR r.status = $1)
            ORDER BY r.created_at DESC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(status)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM reports WHERE ($1::TEXT IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let reports = rows
            .into_iter()
            .map(ReportDetails::try_from)
            .collect::<RepoResult<Vec<_>>>()?;

        Ok((reports, total))
    }

    #[instrument(skip(self))]
    async fn count_received(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE reported_user_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_submitted(&self, user_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE reporter_id = $1")
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, restriction), fields(report_id = %report.id, user_id = %report.reported_user_id))]
    async fn resolve_with_restriction(
        &self,
        report: &Report,
        restriction: &Restriction,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Dropping `tx` on any early return rolls both writes back
        let restricted = sqlx::query(
            r"
            UPDATE users
            SET is_restricted = TRUE, restriction_reason = $2, restriction_start_date = $3,
                restriction_end_date = $4, restriction_duration = $5, restricted_by = $6,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(report.reported_user_id.into_inner())
        .bind(&restriction.reason)
        .bind(restriction.start_date)
        .bind(restriction.end_date)
        .bind(restriction.duration.as_str())
        .bind(restriction.restricted_by.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if restricted.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(report.reported_user_id));
        }

        let resolved = sqlx::query(
            r"
            UPDATE reports
            SET status = $2, admin_notes = $3, resolved_by = $4, resolved_at = $5, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.status.as_str())
        .bind(&report.admin_notes)
        .bind(report.resolved_by.map(Snowflake::into_inner))
        .bind(report.resolved_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if resolved.rows_affected() == 0 {
            return Err(DomainError::ReportNotFound(report.id));
        }

        tx.commit().await.map_err(map_db_error)?;
        debug!("restriction committed");

        Ok(())
    }
}
