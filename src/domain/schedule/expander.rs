//! Recurring event expansion.
//!
//! Turns classroom recurrences into the concrete session instances that fall
//! inside a query range. Pure: no clock, no storage, no shared state.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::{ClassroomSchedule, SessionInstance};

/// Expands `classrooms` into the session instances dated within
/// `[range_start, range_end]` (both inclusive).
///
/// - An inverted query range yields nothing.
/// - Classrooms missing a recurrence field are skipped, never an error.
/// - Each classroom contributes one instance per day in the intersection of
///   its active period and the query range whose weekday it meets on.
///
/// The result is sorted by date, then start time. Cost is
/// O(days in range x classrooms).
pub fn expand(
    classrooms: &[ClassroomSchedule],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<SessionInstance> {
    if range_start > range_end {
        return Vec::new();
    }

    let mut instances = Vec::new();
    let mut skipped = 0usize;

    for classroom in classrooms {
        let Some(rule) = classroom.recurrence() else {
            skipped += 1;
            continue;
        };

        let lower = range_start.max(rule.active_from);
        let upper = range_end.min(rule.active_until);
        if lower > upper {
            continue;
        }

        let days = lower
            .iter_days()
            .take_while(|day| *day <= upper)
            .filter(|day| rule.weekdays.contains(day.weekday()));

        instances.extend(days.map(|date| SessionInstance {
            classroom_id: classroom.id,
            title: classroom.title.clone(),
            date,
            start_time: rule.daily_start,
            end_time: rule.daily_end,
        }));
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped classrooms without a complete recurrence");
    }

    instances.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    instances
}

/// Groups already-expanded instances by date, keeping their order within a day.
pub fn group_by_date(instances: &[SessionInstance]) -> BTreeMap<NaiveDate, Vec<SessionInstance>> {
    let mut days: BTreeMap<NaiveDate, Vec<SessionInstance>> = BTreeMap::new();
    for instance in instances {
        days.entry(instance.date).or_default().push(instance.clone());
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClassroomId;
    use crate::domain::schedule::WeekdaySet;
    use chrono::{NaiveTime, Weekday};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn lunchtime_workweek() -> ClassroomSchedule {
        ClassroomSchedule::new(ClassroomId::new(), "French for Adults")
            .with_active_period(date(2024, 1, 1), date(2024, 12, 31))
            .with_daily_window(time(12, 0), time(13, 0))
            .with_weekdays(WeekdaySet::WORKWEEK)
    }

    fn daily_in_june(title: &str, hour: u32) -> ClassroomSchedule {
        ClassroomSchedule::new(ClassroomId::new(), title)
            .with_active_period(date(2024, 6, 1), date(2024, 6, 30))
            .with_daily_window(time(hour, 0), time(hour + 1, 0))
            .with_weekdays(WeekdaySet::EVERY_DAY)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Scenarios
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn workweek_classroom_yields_five_sessions_in_a_full_week() {
        let classrooms = vec![lunchtime_workweek()];

        let sessions = expand(&classrooms, date(2024, 6, 3), date(2024, 6, 9));

        assert_eq!(sessions.len(), 5);
        let dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![
                date(2024, 6, 3),
                date(2024, 6, 4),
                date(2024, 6, 5),
                date(2024, 6, 6),
                date(2024, 6, 7),
            ]
        );
        for session in &sessions {
            assert_eq!(session.start_time, time(12, 0));
            assert_eq!(session.end_time, time(13, 0));
            assert_eq!(session.title, "French for Adults");
        }
    }

    #[test]
    fn workweek_classroom_yields_nothing_on_a_weekend() {
        let classrooms = vec![lunchtime_workweek()];

        let sessions = expand(&classrooms, date(2024, 6, 8), date(2024, 6, 9));

        assert!(sessions.is_empty());
    }

    #[test]
    fn same_day_sessions_are_ordered_by_start_time() {
        let classrooms = vec![
            daily_in_june("Nine o'clock", 9),
            daily_in_june("Eight o'clock", 8),
        ];

        let sessions = expand(&classrooms, date(2024, 6, 10), date(2024, 6, 10));

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].start_time, time(8, 0));
        assert_eq!(sessions[0].title, "Eight o'clock");
        assert_eq!(sessions[1].start_time, time(9, 0));
    }

    #[test]
    fn inverted_active_period_yields_nothing() {
        let classroom = ClassroomSchedule::new(ClassroomId::new(), "Inverted")
            .with_active_period(date(2024, 6, 15), date(2024, 6, 10))
            .with_daily_window(time(10, 0), time(11, 0))
            .with_weekdays(WeekdaySet::EVERY_DAY);

        assert!(expand(&[classroom.clone()], date(2024, 6, 1), date(2024, 6, 30)).is_empty());
        assert!(expand(&[classroom], date(2024, 6, 10), date(2024, 6, 15)).is_empty());
    }

    #[test]
    fn incomplete_classroom_is_skipped_without_affecting_others() {
        let mut broken = lunchtime_workweek();
        broken.active_weekdays = None;
        let valid = lunchtime_workweek();
        let valid_id = valid.id;

        let sessions = expand(&[broken, valid], date(2024, 6, 3), date(2024, 6, 9));

        assert_eq!(sessions.len(), 5);
        assert!(sessions.iter().all(|s| s.classroom_id == valid_id));
    }

    #[test]
    fn inverted_query_range_yields_nothing() {
        let classrooms = vec![lunchtime_workweek()];
        assert!(expand(&classrooms, date(2024, 6, 9), date(2024, 6, 3)).is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(expand(&[], date(2024, 6, 3), date(2024, 6, 9)).is_empty());
    }

    #[test]
    fn non_overlapping_period_yields_nothing() {
        let classrooms = vec![lunchtime_workweek()];
        assert!(expand(&classrooms, date(2025, 1, 6), date(2025, 1, 10)).is_empty());
    }

    #[test]
    fn expansion_is_clipped_to_active_period() {
        let classroom = ClassroomSchedule::new(ClassroomId::new(), "Short course")
            .with_active_period(date(2024, 6, 5), date(2024, 6, 6))
            .with_daily_window(time(18, 0), time(19, 0))
            .with_weekdays(WeekdaySet::EVERY_DAY);

        let sessions = expand(&[classroom], date(2024, 6, 1), date(2024, 6, 30));

        let dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![date(2024, 6, 5), date(2024, 6, 6)]);
    }

    #[test]
    fn inverted_daily_window_passes_through_unchanged() {
        let classroom = ClassroomSchedule::new(ClassroomId::new(), "Overnight")
            .with_active_period(date(2024, 6, 3), date(2024, 6, 3))
            .with_daily_window(time(22, 0), time(6, 0))
            .with_weekdays(WeekdaySet::EVERY_DAY);

        let sessions = expand(&[classroom], date(2024, 6, 3), date(2024, 6, 3));

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].start_time, time(22, 0));
        assert_eq!(sessions[0].end_time, time(6, 0));
    }

    #[test]
    fn group_by_date_buckets_in_order() {
        let classrooms = vec![
            daily_in_june("Nine o'clock", 9),
            daily_in_june("Eight o'clock", 8),
        ];
        let sessions = expand(&classrooms, date(2024, 6, 10), date(2024, 6, 11));

        let days = group_by_date(&sessions);

        assert_eq!(days.len(), 2);
        let monday = &days[&date(2024, 6, 10)];
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].start_time, time(8, 0));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..120).prop_map(|offset| date(2024, 5, 1) + chrono::Duration::days(offset))
    }

    fn arb_schedule() -> impl Strategy<Value = ClassroomSchedule> {
        (
            arb_date(),
            arb_date(),
            0u32..24,
            0u32..24,
            any::<[bool; 7]>(),
            any::<bool>(),
        )
            .prop_map(|(from, until, start_h, end_h, flags, complete)| {
                let schedule = ClassroomSchedule::new(ClassroomId::new(), "Generated")
                    .with_active_period(from, until)
                    .with_daily_window(time(start_h, 0), time(end_h, 30));
                if complete {
                    schedule.with_weekdays(WeekdaySet::from_flags(&flags))
                } else {
                    schedule
                }
            })
    }

    proptest! {
        #[test]
        fn prop_inverted_range_is_always_empty(
            classrooms in prop::collection::vec(arb_schedule(), 0..6),
            a in arb_date(),
            b in arb_date(),
        ) {
            prop_assume!(a != b);
            let (start, end) = if a > b { (a, b) } else { (b, a) };
            prop_assert!(expand(&classrooms, start, end).is_empty());
        }

        #[test]
        fn prop_instances_respect_period_range_and_weekdays(
            classrooms in prop::collection::vec(arb_schedule(), 0..6),
            a in arb_date(),
            b in arb_date(),
        ) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            for instance in expand(&classrooms, start, end) {
                let owner = classrooms.iter().find(|c| c.id == instance.classroom_id).unwrap();
                let rule = owner.recurrence().unwrap();
                prop_assert!(instance.date >= start && instance.date <= end);
                prop_assert!(instance.date >= rule.active_from && instance.date <= rule.active_until);
                prop_assert!(rule.weekdays.contains(instance.date.weekday()));
            }
        }

        #[test]
        fn prop_output_is_sorted_and_deterministic(
            classrooms in prop::collection::vec(arb_schedule(), 0..6),
            a in arb_date(),
            b in arb_date(),
        ) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let first = expand(&classrooms, start, end);
            let second = expand(&classrooms, start, end);
            prop_assert_eq!(&first, &second);
            for pair in first.windows(2) {
                prop_assert!(
                    pair[0].date < pair[1].date
                        || (pair[0].date == pair[1].date && pair[0].start_time <= pair[1].start_time)
                );
            }
        }

        #[test]
        fn prop_non_overlapping_classrooms_contribute_nothing(
            schedule in arb_schedule(),
            a in arb_date(),
            b in arb_date(),
        ) {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            let (from, until) = (schedule.active_from.unwrap(), schedule.active_until.unwrap());
            prop_assume!(until < start || from > end);
            prop_assert!(expand(&[schedule], start, end).is_empty());
        }
    }

    #[test]
    fn sunday_membership_uses_chrono_weekday() {
        // 2024-06-09 is a Sunday
        assert_eq!(date(2024, 6, 9).weekday(), Weekday::Sun);
        let classroom = ClassroomSchedule::new(ClassroomId::new(), "Sunday school")
            .with_active_period(date(2024, 6, 1), date(2024, 6, 30))
            .with_daily_window(time(10, 0), time(11, 0))
            .with_weekdays(WeekdaySet::EMPTY.with(Weekday::Sun));

        let sessions = expand(&[classroom], date(2024, 6, 3), date(2024, 6, 9));

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].date, date(2024, 6, 9));
    }
}
