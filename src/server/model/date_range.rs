//! Calendar date ranges used for stays.
//!
//! A stay occupies the half-open interval `[start, end)`: the first night is `start` and
//! `end` is the checkout day, which the next guest may use as their arrival day.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::server::error::AppError;

/// Non-empty half-open range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting ranges that do not contain at least one night.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - `start` is strictly before `end`
    /// - `Err(AppError::BadRequest)` - `start` is on or after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start >= end {
            return Err(AppError::BadRequest(format!(
                "Start date {} must be before end date {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Every occupied night, in ascending order, `end` excluded.
    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }
}

/// Unions the nights of several stays into an ascending, deduplicated list.
pub fn occupied_nights<I>(stays: I) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = DateRange>,
{
    stays
        .into_iter()
        .flat_map(|stay| stay.nights())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
