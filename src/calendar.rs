//! Shift calendar arithmetic.
//!
//! Pure availability queries over a work center's weekly shift pattern and
//! maintenance blackout windows: "next available instant at or after T" and
//! "instant reached after consuming D working minutes starting at T".
//!
//! # Time Model
//!
//! Shifts recur weekly, keyed by day of week (0 = Sunday .. 6 = Saturday)
//! with whole-hour UTC bounds, half-open `[start_hour, end_hour)`.
//! Maintenance windows are absolute half-open intervals that override
//! shifts. Every function here is pure: same inputs, same outputs.
//!
//! # Empty Calendars
//!
//! A work center with no shift on any day of the week can never host work.
//! Functions return `None` in that case; callers map it to
//! [`ReflowError::UnconfiguredCalendar`](crate::ReflowError::UnconfiguredCalendar).

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc};

use crate::models::{MaintenanceWindow, Shift};

/// Day of week of an instant (0 = Sunday .. 6 = Saturday).
#[inline]
fn day_of_week(instant: DateTime<Utc>) -> u32 {
    instant.weekday().num_days_from_sunday()
}

/// The instant at `hour` o'clock (UTC) on the same day as `instant`.
///
/// Expressed as midnight plus whole hours so that `hour = 24` lands on the
/// following midnight instead of overflowing.
#[inline]
fn instant_at_hour(instant: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let midnight = instant.date_naive().and_time(NaiveTime::MIN).and_utc();
    midnight + Duration::hours(i64::from(hour))
}

/// Returns the first shift entry matching a day of week, if any.
///
/// First-match semantics: when several entries share a day, later ones are
/// never consulted.
pub fn shift_for_day(day_of_week: u32, shifts: &[Shift]) -> Option<&Shift> {
    shifts.iter().find(|s| s.day_of_week == day_of_week)
}

/// Earliest instant at or after `instant` that falls inside a shift window.
///
/// If the instant's day has a shift and its hour is within
/// `[start_hour, end_hour)`, the instant is returned unchanged. If it is
/// before the shift, it snaps to that day's `start_hour` (sub-hour fields
/// zeroed). Otherwise the scan walks forward day by day, up to 7 days, to
/// the first day with a shift.
///
/// Returns `None` when no day of the week has a shift.
pub fn next_shift_start(instant: DateTime<Utc>, shifts: &[Shift]) -> Option<DateTime<Utc>> {
    if let Some(shift) = shift_for_day(day_of_week(instant), shifts) {
        let hour = instant.hour();
        if hour >= shift.start_hour && hour < shift.end_hour {
            return Some(instant);
        }
        if hour < shift.start_hour {
            return Some(instant_at_hour(instant, shift.start_hour));
        }
    }

    for days_ahead in 1..=7 {
        let day = instant + Duration::days(days_ahead);
        if let Some(shift) = shift_for_day(day_of_week(day), shifts) {
            return Some(instant_at_hour(day, shift.start_hour));
        }
    }

    None
}

/// Earliest on-shift instant at or after `instant` that is outside every
/// maintenance window.
///
/// Alternates between snapping to the next shift start and jumping past any
/// maintenance window containing the snapped instant. Terminates because
/// windows are finite and each jump strictly advances time.
pub fn next_available_instant(
    instant: DateTime<Utc>,
    shifts: &[Shift],
    windows: &[MaintenanceWindow],
) -> Option<DateTime<Utc>> {
    let mut current = instant;
    loop {
        current = next_shift_start(current, shifts)?;
        match windows.iter().find(|w| w.contains(current)) {
            Some(window) => current = window.end_date,
            None => return Some(current),
        }
    }
}

/// Instant reached after consuming `duration_minutes` of working time
/// starting at `start`.
///
/// Splits the duration across availability windows: within each visited
/// shift day, minutes are consumed up to the next interruption (the shift's
/// end-of-day boundary or the next maintenance window starting inside the
/// remaining shift, whichever comes first), and the remainder carries over.
/// Spans day and week boundaries and interleaved blackouts; only minutes
/// inside an active shift and outside every maintenance window count.
///
/// A zero or negative duration returns `start` unchanged. Returns `None`
/// when no day of the week has a shift.
pub fn end_after_working_minutes(
    start: DateTime<Utc>,
    duration_minutes: i64,
    shifts: &[Shift],
    windows: &[MaintenanceWindow],
) -> Option<DateTime<Utc>> {
    if duration_minutes <= 0 {
        return Some(start);
    }

    let mut remaining = duration_minutes;
    let mut current = start;

    loop {
        current = next_available_instant(current, shifts, windows)?;

        // next_available_instant always lands inside a shift window.
        let shift = shift_for_day(day_of_week(current), shifts)?;
        let shift_end = instant_at_hour(current, shift.end_hour);

        let interruption = windows
            .iter()
            .map(|w| w.start_date)
            .filter(|&s| s > current && s < shift_end)
            .min()
            .unwrap_or(shift_end);

        let available = (interruption - current).num_minutes();
        if available >= remaining {
            return Some(current + Duration::minutes(remaining));
        }

        remaining -= available;
        current = interruption;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // 2024-01-01 is a Monday.
    fn mon(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    fn weekday_shifts() -> Vec<Shift> {
        (1..=5).map(|day| Shift::new(day, 8, 17)).collect()
    }

    #[test]
    fn test_shift_for_day_match() {
        let shifts = weekday_shifts();
        let shift = shift_for_day(3, &shifts).unwrap();
        assert_eq!(shift, &Shift::new(3, 8, 17));
    }

    #[test]
    fn test_shift_for_day_none_on_sunday() {
        assert!(shift_for_day(0, &weekday_shifts()).is_none());
    }

    #[test]
    fn test_shift_for_day_first_match_wins() {
        let shifts = vec![Shift::new(1, 8, 12), Shift::new(1, 13, 17)];
        assert_eq!(shift_for_day(1, &shifts), Some(&Shift::new(1, 8, 12)));
    }

    #[test]
    fn test_next_shift_start_within_shift() {
        let t = mon(9, 30);
        assert_eq!(next_shift_start(t, &weekday_shifts()), Some(t));
    }

    #[test]
    fn test_next_shift_start_before_shift_snaps_forward() {
        let t = mon(6, 45);
        assert_eq!(next_shift_start(t, &weekday_shifts()), Some(mon(8, 0)));
    }

    #[test]
    fn test_next_shift_start_after_shift_rolls_to_next_day() {
        let t = mon(18, 0);
        let tue_8am = Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();
        assert_eq!(next_shift_start(t, &weekday_shifts()), Some(tue_8am));
    }

    #[test]
    fn test_next_shift_start_skips_weekend() {
        // 2024-01-06 is a Saturday.
        let sat = Utc.with_ymd_and_hms(2024, 1, 6, 10, 0, 0).unwrap();
        let next_mon_8am = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();
        assert_eq!(next_shift_start(sat, &weekday_shifts()), Some(next_mon_8am));
    }

    #[test]
    fn test_next_shift_start_sunday_day_of_week_mapping() {
        // 2024-01-07 is a Sunday; day_of_week must map it to 0, not 7.
        let sun = Utc.with_ymd_and_hms(2024, 1, 7, 8, 0, 0).unwrap();
        let next_mon_8am = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();
        assert_eq!(next_shift_start(sun, &weekday_shifts()), Some(next_mon_8am));
    }

    #[test]
    fn test_next_shift_start_single_shift_day_wraps_full_week() {
        let shifts = vec![Shift::new(1, 8, 17)]; // Mondays only
        let mon_evening = mon(18, 0);
        let next_mon = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).unwrap();
        assert_eq!(next_shift_start(mon_evening, &shifts), Some(next_mon));
    }

    #[test]
    fn test_next_shift_start_empty_calendar() {
        assert!(next_shift_start(mon(8, 0), &[]).is_none());
    }

    #[test]
    fn test_next_available_instant_jumps_past_maintenance() {
        let shifts = weekday_shifts();
        let windows = vec![MaintenanceWindow::new(mon(10, 0), mon(14, 0))];

        // Outside the window: unchanged.
        assert_eq!(
            next_available_instant(mon(9, 0), &shifts, &windows),
            Some(mon(9, 0))
        );
        // Inside the window: pushed to its end.
        assert_eq!(
            next_available_instant(mon(11, 0), &shifts, &windows),
            Some(mon(14, 0))
        );
    }

    #[test]
    fn test_next_available_instant_chained_windows() {
        let shifts = weekday_shifts();
        let windows = vec![
            MaintenanceWindow::new(mon(10, 0), mon(12, 0)),
            MaintenanceWindow::new(mon(12, 0), mon(13, 0)),
        ];
        assert_eq!(
            next_available_instant(mon(10, 30), &shifts, &windows),
            Some(mon(13, 0))
        );
    }

    #[test]
    fn test_consume_zero_duration() {
        let t = mon(9, 0);
        assert_eq!(end_after_working_minutes(t, 0, &weekday_shifts(), &[]), Some(t));
    }

    #[test]
    fn test_consume_within_single_shift() {
        let end = end_after_working_minutes(mon(8, 0), 60, &weekday_shifts(), &[]);
        assert_eq!(end, Some(mon(9, 0)));
    }

    #[test]
    fn test_consume_spills_overnight() {
        // 120 min from Monday 16:00 in an 08-17 shift: 60 today, 60 tomorrow.
        let end = end_after_working_minutes(mon(16, 0), 120, &weekday_shifts(), &[]);
        let tue_9am = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        assert_eq!(end, Some(tue_9am));
    }

    #[test]
    fn test_consume_crosses_weekend() {
        // 120 min from Friday 16:00: 60 on Friday, weekend skipped, 60 Monday.
        let fri_4pm = Utc.with_ymd_and_hms(2024, 1, 5, 16, 0, 0).unwrap();
        let end = end_after_working_minutes(fri_4pm, 120, &weekday_shifts(), &[]);
        let mon_9am = Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap();
        assert_eq!(end, Some(mon_9am));
    }

    #[test]
    fn test_consume_splits_around_maintenance() {
        // 540 working minutes from Monday 08:00 with a 10:00-14:00 blackout:
        // 120 before, 180 after, remaining 240 overflow to Tuesday 12:00.
        let windows = vec![MaintenanceWindow::new(mon(10, 0), mon(14, 0))];
        let end = end_after_working_minutes(mon(8, 0), 540, &weekday_shifts(), &windows);
        let tue_noon = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(end, Some(tue_noon));
    }

    #[test]
    fn test_consume_start_inside_maintenance() {
        let windows = vec![MaintenanceWindow::new(mon(10, 0), mon(14, 0))];
        let end = end_after_working_minutes(mon(11, 0), 60, &weekday_shifts(), &windows);
        assert_eq!(end, Some(mon(15, 0)));
    }

    #[test]
    fn test_consume_maintenance_spanning_shift_end() {
        // Blackout 15:00-20:00 swallows the rest of Monday's shift; the
        // remaining 90 min resume Tuesday 08:00.
        let windows = vec![MaintenanceWindow::new(mon(15, 0), mon(20, 0))];
        let end = end_after_working_minutes(mon(14, 0), 150, &weekday_shifts(), &windows);
        let tue_930 = Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        assert_eq!(end, Some(tue_930));
    }

    #[test]
    fn test_consume_start_outside_shift_snaps_first() {
        let end = end_after_working_minutes(mon(6, 0), 60, &weekday_shifts(), &[]);
        assert_eq!(end, Some(mon(9, 0)));
    }

    #[test]
    fn test_consume_empty_calendar() {
        assert!(end_after_working_minutes(mon(8, 0), 60, &[], &[]).is_none());
    }

    #[test]
    fn test_shift_ending_at_hour_24() {
        let shifts = vec![Shift::new(1, 16, 24)];
        let end = end_after_working_minutes(mon(22, 0), 120, &shifts, &[]);
        let tue_midnight = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(end, Some(tue_midnight));
    }
}
