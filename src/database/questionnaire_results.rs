// ABOUTME: Questionnaire result database operations
// ABOUTME: Stores scored questionnaires, one per (questionnaire, user), and lists them per user

use super::{conflict_with, elapsed_ms, Database};
use crate::logging::AppLogger;
use chrono::Utc;
use helena_core::errors::{AppError, AppResult};
use helena_core::models::{Gender, NewQuestionnaireResult, QuestionnaireResult};
use sqlx::Row;
use std::time::Instant;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_questionnaire_results(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS questionnaire_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                questionnaire_id TEXT NOT NULL,
                gender TEXT NOT NULL CHECK (gender IN ('male', 'female')),
                vo2max REAL NOT NULL,
                bmi REAL,
                fmi REAL,
                tv_hours REAL,
                score INTEGER NOT NULL,
                classification TEXT NOT NULL,
                timestamp DATETIME NOT NULL,
                UNIQUE (questionnaire_id, user_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_questionnaire_results_user ON questionnaire_results(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Store a scored questionnaire
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the user already submitted this
    /// questionnaire, or a database error if the insert fails
    pub async fn create_questionnaire_result(
        &self,
        result: &NewQuestionnaireResult,
    ) -> AppResult<QuestionnaireResult> {
        let started = Instant::now();
        let timestamp = Utc::now();

        let inserted = sqlx::query(
            r"
            INSERT INTO questionnaire_results (
                user_id, questionnaire_id, gender, vo2max, bmi, fmi, tv_hours,
                score, classification, timestamp
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(result.user_id.to_string())
        .bind(&result.questionnaire_id)
        .bind(result.gender.as_str())
        .bind(result.vo2max)
        .bind(result.bmi)
        .bind(result.fmi)
        .bind(result.tv_hours)
        .bind(i64::from(result.score))
        .bind(&result.classification)
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map_err(conflict_with(|| {
            format!(
                "Questionnaire {} has already been submitted",
                result.questionnaire_id
            )
        }))?;

        AppLogger::log_database_operation(
            "insert",
            "questionnaire_results",
            true,
            elapsed_ms(started),
        );

        Ok(QuestionnaireResult {
            id: inserted.last_insert_rowid(),
            user_id: result.user_id,
            questionnaire_id: result.questionnaire_id.clone(),
            gender: result.gender,
            vo2max: result.vo2max,
            bmi: result.bmi,
            fmi: result.fmi,
            tv_hours: result.tv_hours,
            score: result.score,
            classification: result.classification.clone(),
            timestamp,
        })
    }

    /// All results of one user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt
    pub async fn list_questionnaire_results(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<QuestionnaireResult>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, questionnaire_id, gender, vo2max, bmi, fmi, tv_hours,
                   score, classification, timestamp
            FROM questionnaire_results
            WHERE user_id = $1
            ORDER BY timestamp DESC, id DESC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_questionnaire_result).collect()
    }

    fn row_to_questionnaire_result(
        row: &sqlx::sqlite::SqliteRow,
    ) -> AppResult<QuestionnaireResult> {
        let user_id: String = row.try_get("user_id")?;
        let user_id = Uuid::parse_str(&user_id)
            .map_err(|e| AppError::database(format!("Invalid user id {user_id}: {e}")))?;
        let gender: String = row.try_get("gender")?;
        let gender: Gender = gender.parse()?;
        let score: i64 = row.try_get("score")?;
        let score = u32::try_from(score)
            .map_err(|_| AppError::database(format!("Stored score {score} is out of range")))?;

        Ok(QuestionnaireResult {
            id: row.try_get("id")?,
            user_id,
            questionnaire_id: row.try_get("questionnaire_id")?,
            gender,
            vo2max: row.try_get("vo2max")?,
            bmi: row.try_get("bmi")?,
            fmi: row.try_get("fmi")?,
            tv_hours: row.try_get("tv_hours")?,
            score,
            classification: row.try_get("classification")?,
            timestamp: row.try_get("timestamp")?,
        })
    }
}
