//! Coupon schedule generation.
//!
//! Schedules are generated unadjusted from one anchor date (backward
//! from the end date by default, matching bond and swap market
//! practice), then rolled with a business day convention. A period
//! that does not divide evenly leaves a short stub at the far end of
//! the generation direction.

use serde::{Deserialize, Serialize};

use crate::calendars::{BusinessDayConvention, Calendar, WeekendCalendar};
use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Frequency};

/// Direction of schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateGeneration {
    /// Generate backward from the end date (short stub at the front).
    #[default]
    Backward,
    /// Generate forward from the start date (short stub at the back).
    Forward,
}

/// An adjusted, strictly increasing sequence of period dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Starts building a schedule between two dates.
    #[must_use]
    pub fn builder(start: Date, end: Date) -> ScheduleBuilder<'static> {
        ScheduleBuilder {
            start,
            end,
            frequency: Frequency::Annual,
            calendar: &WeekendCalendar,
            convention: BusinessDayConvention::ModifiedFollowing,
            generation: DateGeneration::Backward,
            end_of_month: false,
        }
    }

    /// Returns the adjusted schedule dates, including both endpoints.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns consecutive (start, end) accrual periods.
    #[must_use]
    pub fn periods(&self) -> Vec<(Date, Date)> {
        self.dates.windows(2).map(|w| (w[0], w[1])).collect()
    }

    /// Returns the number of schedule dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the schedule has no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the first schedule date.
    #[must_use]
    pub fn first(&self) -> Date {
        self.dates[0]
    }

    /// Returns the last schedule date.
    #[must_use]
    pub fn last(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}

/// Fluent builder for [`Schedule`].
#[derive(Clone, Copy)]
pub struct ScheduleBuilder<'a> {
    start: Date,
    end: Date,
    frequency: Frequency,
    calendar: &'a dyn Calendar,
    convention: BusinessDayConvention,
    generation: DateGeneration,
    end_of_month: bool,
}

impl<'a> ScheduleBuilder<'a> {
    /// Sets the coupon frequency (default: annual).
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the business day calendar (default: weekends only).
    #[must_use]
    pub fn calendar<'b>(self, calendar: &'b dyn Calendar) -> ScheduleBuilder<'b> {
        ScheduleBuilder {
            start: self.start,
            end: self.end,
            frequency: self.frequency,
            calendar,
            convention: self.convention,
            generation: self.generation,
            end_of_month: self.end_of_month,
        }
    }

    /// Sets the adjustment convention (default: modified following).
    #[must_use]
    pub fn convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Sets the generation direction (default: backward).
    #[must_use]
    pub fn generation(mut self, generation: DateGeneration) -> Self {
        self.generation = generation;
        self
    }

    /// Keeps generated dates at month end when the anchor date is month end.
    #[must_use]
    pub fn end_of_month(mut self, end_of_month: bool) -> Self {
        self.end_of_month = end_of_month;
        self
    }

    /// Generates the schedule.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSchedule` if the end date is not after
    /// the start date, or if adjustment collapses two dates together.
    pub fn build(self) -> CoreResult<Schedule> {
        if self.end <= self.start {
            return Err(CoreError::invalid_schedule(format!(
                "end date {} not after start date {}",
                self.end, self.start
            )));
        }

        let mut unadjusted = match self.frequency {
            Frequency::Zero => vec![self.start, self.end],
            _ => self.generate_unadjusted()?,
        };

        if self.end_of_month && self.anchor().is_end_of_month() {
            for date in unadjusted.iter_mut().skip(1).rev().skip(1) {
                *date = date.end_of_month();
            }
        }

        let mut dates = Vec::with_capacity(unadjusted.len());
        for date in unadjusted {
            dates.push(self.calendar.adjust(date, self.convention));
        }

        for w in dates.windows(2) {
            if w[1] <= w[0] {
                return Err(CoreError::invalid_schedule(format!(
                    "adjusted dates not strictly increasing: {} then {}",
                    w[0], w[1]
                )));
            }
        }

        Ok(Schedule { dates })
    }

    fn anchor(&self) -> Date {
        match self.generation {
            DateGeneration::Backward => self.end,
            DateGeneration::Forward => self.start,
        }
    }

    fn generate_unadjusted(&self) -> CoreResult<Vec<Date>> {
        let step = self.frequency.months_per_period() as i32;
        let mut dates = Vec::new();

        match self.generation {
            DateGeneration::Backward => {
                let mut k = 0;
                loop {
                    let date = self.end.add_months(-k * step)?;
                    if date <= self.start {
                        break;
                    }
                    dates.push(date);
                    k += 1;
                }
                dates.push(self.start);
                dates.reverse();
            }
            DateGeneration::Forward => {
                let mut k = 0;
                loop {
                    let date = self.start.add_months(k * step)?;
                    if date >= self.end {
                        break;
                    }
                    dates.push(date);
                    k += 1;
                }
                dates.push(self.end);
            }
        }

        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::TargetCalendar;

    #[test]
    fn test_end_before_start_rejected() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let result = Schedule::builder(start, start).build();
        assert!(matches!(result, Err(CoreError::InvalidSchedule { .. })));
    }

    #[test]
    fn test_annual_backward_regular() {
        let start = Date::from_ymd(2023, 3, 15).unwrap();
        let end = Date::from_ymd(2033, 3, 15).unwrap();
        let schedule = Schedule::builder(start, end)
            .frequency(Frequency::Annual)
            .convention(BusinessDayConvention::Unadjusted)
            .build()
            .unwrap();
        assert_eq!(schedule.len(), 11);
        assert_eq!(schedule.first(), start);
        assert_eq!(schedule.last(), end);
        assert_eq!(schedule.dates()[1], Date::from_ymd(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_backward_short_front_stub() {
        // 20 months of semi-annual periods leaves a 2-month stub at the front
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2026, 9, 15).unwrap();
        let schedule = Schedule::builder(start, end)
            .frequency(Frequency::SemiAnnual)
            .convention(BusinessDayConvention::Unadjusted)
            .build()
            .unwrap();
        assert_eq!(schedule.dates()[0], start);
        assert_eq!(schedule.dates()[1], Date::from_ymd(2025, 3, 15).unwrap());
        assert_eq!(schedule.last(), end);
    }

    #[test]
    fn test_forward_short_back_stub() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2026, 9, 15).unwrap();
        let schedule = Schedule::builder(start, end)
            .frequency(Frequency::SemiAnnual)
            .generation(DateGeneration::Forward)
            .convention(BusinessDayConvention::Unadjusted)
            .build()
            .unwrap();
        assert_eq!(schedule.dates()[1], Date::from_ymd(2025, 7, 15).unwrap());
        let n = schedule.len();
        assert_eq!(schedule.dates()[n - 2], Date::from_ymd(2026, 7, 15).unwrap());
        assert_eq!(schedule.last(), end);
    }

    #[test]
    fn test_adjustment_applied() {
        // 2026-03-15 falls on a Sunday: modified following rolls to Monday 16th
        let start = Date::from_ymd(2025, 3, 15).unwrap();
        let end = Date::from_ymd(2027, 3, 15).unwrap();
        let cal = TargetCalendar;
        let schedule = Schedule::builder(start, end)
            .frequency(Frequency::Annual)
            .calendar(&cal)
            .build()
            .unwrap();
        assert_eq!(schedule.dates()[1], Date::from_ymd(2026, 3, 16).unwrap());
    }

    #[test]
    fn test_end_of_month_roll() {
        let start = Date::from_ymd(2025, 2, 28).unwrap();
        let end = Date::from_ymd(2026, 2, 28).unwrap();
        let schedule = Schedule::builder(start, end)
            .frequency(Frequency::SemiAnnual)
            .convention(BusinessDayConvention::Unadjusted)
            .end_of_month(true)
            .build()
            .unwrap();
        // Interior date rolls to August 31 rather than August 28
        assert_eq!(schedule.dates()[1], Date::from_ymd(2025, 8, 31).unwrap());
    }

    #[test]
    fn test_zero_frequency() {
        let start = Date::from_ymd(2025, 1, 15).unwrap();
        let end = Date::from_ymd(2030, 1, 15).unwrap();
        let schedule = Schedule::builder(start, end)
            .frequency(Frequency::Zero)
            .convention(BusinessDayConvention::Unadjusted)
            .build()
            .unwrap();
        assert_eq!(schedule.dates(), &[start, end]);
    }

    #[test]
    fn test_periods_pairing() {
        let start = Date::from_ymd(2025, 3, 15).unwrap();
        let end = Date::from_ymd(2028, 3, 15).unwrap();
        let schedule = Schedule::builder(start, end)
            .convention(BusinessDayConvention::Unadjusted)
            .build()
            .unwrap();
        let periods = schedule.periods();
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].0, start);
        assert_eq!(periods[2].1, end);
    }
}
