// 月ごとの週区切りと基準週からの経過週数の性質を確認する

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use duty_rotation::domain::week_calendar::{last_day_of_month, normalize_month};
use duty_rotation::{absolute_week_offset, locate_today, weeks_in_month};

proptest! {
    /// 空でなく・日曜始まり・隙間なし・月の全日を覆う
    #[test]
    fn weeks_cover_every_day_of_the_month(year in 1900i32..2200, month in 0i32..12) {
        let weeks = weeks_in_month(year, month);
        prop_assert!(!weeks.is_empty());

        let first_day = NaiveDate::from_ymd_opt(year, month as u32 + 1, 1).unwrap();
        let last_day = last_day_of_month(year, month as u32);

        prop_assert_eq!(weeks[0].start.weekday(), Weekday::Sun);
        prop_assert!(weeks[0].start <= first_day);
        prop_assert!(first_day - weeks[0].start < Duration::days(7));
        prop_assert!(weeks.last().unwrap().end >= last_day);

        for (i, week) in weeks.iter().enumerate() {
            prop_assert_eq!(week.sequence_number as usize, i + 1);
            prop_assert_eq!(week.end - week.start, Duration::days(6));
            if i > 0 {
                prop_assert_eq!(week.start - weeks[i - 1].start, Duration::days(7));
            }
        }

        let mut day = first_day;
        while day <= last_day {
            prop_assert!(locate_today(&weeks, day).is_some());
            day = day.succ_opt().unwrap();
        }
    }

    /// 最後の週の前の週までで月末に届いていないこと (余分な週を作らない)
    #[test]
    fn no_trailing_week_after_month_end(year in 1900i32..2200, month in 0i32..12) {
        let weeks = weeks_in_month(year, month);
        let last_day = last_day_of_month(year, month as u32);
        if weeks.len() > 1 {
            prop_assert!(weeks[weeks.len() - 2].end < last_day);
        }
        prop_assert!((4..=6).contains(&weeks.len()));
    }

    /// 連続する週の経過週数は符号に関係なくちょうど1ずつ増える
    #[test]
    fn consecutive_weeks_differ_by_one(year in 1900i32..2200, month in 0i32..12) {
        let reference = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
        let weeks = weeks_in_month(year, month);
        for pair in weeks.windows(2) {
            prop_assert_eq!(
                absolute_week_offset(&pair[1], reference) - absolute_week_offset(&pair[0], reference),
                1
            );
        }
    }

    /// 月を越えて並べても同じ週は同じ経過週数になる
    #[test]
    fn shared_boundary_week_has_one_offset(year in 1900i32..2200, month in 0i32..12) {
        let reference = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
        let this_month = weeks_in_month(year, month);
        let next_month = weeks_in_month(year, month + 1);

        let last = this_month.last().unwrap();
        if let Some(shared) = next_month.iter().find(|w| w.start == last.start) {
            prop_assert_eq!(
                absolute_week_offset(last, reference),
                absolute_week_offset(shared, reference)
            );
        }
    }

    #[test]
    fn normalize_month_is_consistent(year in -1000i32..3000, month in -48i32..48) {
        let (y, m) = normalize_month(year, month);
        prop_assert!(m < 12);
        prop_assert_eq!(i64::from(y) * 12 + i64::from(m), i64::from(year) * 12 + i64::from(month));
    }
}

#[test]
fn november_2025_contains_reference_week() {
    let reference = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
    let weeks = weeks_in_month(2025, 10);

    let index = weeks.iter().position(|w| w.start == reference).unwrap();
    assert_eq!(absolute_week_offset(&weeks[index], reference), 0);
    assert_eq!(absolute_week_offset(&weeks[index - 1], reference), -1);
    assert_eq!(absolute_week_offset(&weeks[index + 1], reference), 1);
}

#[test]
fn december_to_january_boundary() {
    // 2025年12月31日は水曜 -> 最後の週は 12/28 - 1/3
    let december = weeks_in_month(2025, 11);
    let last = december.last().unwrap();
    assert_eq!(last.start, NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());
    assert_eq!(last.label, "Dec 28 - Jan 3");

    // 翌年1月の最初の週は同じ週
    let january = weeks_in_month(2026, 0);
    assert_eq!(january[0].start, last.start);
}

#[test]
fn leap_february() {
    // 2024年2月: 1日は木曜, 29日は木曜
    let weeks = weeks_in_month(2024, 1);
    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0].start, NaiveDate::from_ymd_opt(2024, 1, 28).unwrap());
    assert_eq!(weeks[4].end, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
}

#[test]
fn weeks_before_reference_floor_downwards() {
    let reference = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
    // 2024年1月の最初の週 (2023-12-31) は基準週の 97 週前
    let weeks = weeks_in_month(2024, 0);
    assert_eq!(weeks[0].start, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert_eq!(absolute_week_offset(&weeks[0], reference), -97);
}
