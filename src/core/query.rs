use crate::core::dataset::Dataset;
use crate::domain::names::{MONTHS, WEEKDAYS};
use crate::utils::error::{ApiError, Result};
use std::sync::Arc;

/// Result of a counting query: the English name that was matched and how many rows had it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseCount {
    pub name: &'static str,
    pub count: usize,
}

/// Read-only queries over the shared dataset. Cloning only bumps the `Arc`.
#[derive(Debug, Clone)]
pub struct ReleaseQueries {
    dataset: Arc<Dataset>,
}

impl ReleaseQueries {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Counts titled releases in the month named by a Spanish `token`, in any case.
    pub fn count_by_month(&self, token: &str) -> Result<ReleaseCount> {
        let token = token.to_lowercase();
        let name = MONTHS.translate(&token).ok_or(ApiError::InvalidMonth)?;

        let count = self
            .dataset
            .monthly()
            .iter()
            .filter(|r| r.month == name && r.title.is_some())
            .count();

        tracing::debug!(token = %token, month = name, count, "Counted monthly releases");
        Ok(ReleaseCount { name, count })
    }

    /// Counts every release on the weekday named by a Spanish `token`, in any case.
    pub fn count_by_weekday(&self, token: &str) -> Result<ReleaseCount> {
        let token = token.to_lowercase();
        let name = WEEKDAYS.translate(&token).ok_or(ApiError::InvalidWeekday)?;

        let count = self
            .dataset
            .daily()
            .iter()
            .filter(|r| r.day_of_week == name)
            .count();

        tracing::debug!(token = %token, day = name, count, "Counted daily releases");
        Ok(ReleaseCount { name, count })
    }
}
