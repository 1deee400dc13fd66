use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::domain::roster_model::AbsWeek;

/// カレンダー上の1週間 (日曜始まり)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    /// 月内の週番号 (1始まり)
    pub sequence_number: u32,
    /// 常に日曜
    pub start: NaiveDate,
    /// start + 6日 (土曜)
    pub end: NaiveDate,
    pub label: String,
}

impl CalendarWeek {
    fn starting_at(sequence_number: u32, start: NaiveDate) -> Self {
        let end = start + Duration::days(6);
        Self {
            sequence_number,
            start,
            end,
            label: format_week_label(start, end),
        }
    }

    /// 両端を含む
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// "NOW" 表示の判定
    pub fn is_now(&self, today: NaiveDate) -> bool {
        self.contains(today)
    }

    /// レポートの列見出し 例: "W2 (9-15)"
    pub fn column_header(&self) -> String {
        format!(
            "W{} ({}-{})",
            self.sequence_number,
            self.start.day(),
            self.end.day()
        )
    }
}

/// "Nov 9 - 15" / "Nov 30 - Dec 6"
fn format_week_label(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() {
        format!("{} {} - {}", start.format("%b"), start.day(), end.day())
    } else {
        format!(
            "{} {} - {} {}",
            start.format("%b"),
            start.day(),
            end.format("%b"),
            end.day()
        )
    }
}

/// 範囲外の月を前後の年に繰り上げ・繰り下げする
/// ※ month: 0 (1月) 〜 11 (12月)
///
/// ```
/// use duty_rotation::domain::week_calendar::normalize_month;
/// assert_eq!(normalize_month(2025, 12), (2026, 0));
/// assert_eq!(normalize_month(2025, -1), (2024, 11));
/// ```
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month);
    let year = i32::try_from(total.div_euclid(12)).expect("year overflowed i32");
    (year, total.rem_euclid(12) as u32)
}

/// 月の移動 (前月 = -1, 翌月 = +1)
/// 年が i32 に収まらなければ None
pub fn step_month(year: i32, month: u32, delta: i64) -> Option<(i32, u32)> {
    let total = (i64::from(year) * 12 + i64::from(month)).checked_add(delta)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    Some((year, total.rem_euclid(12) as u32))
}

/// その月の1日
///
/// # Panics
/// chrono が扱えない年を渡した場合 (呼び出し側のバグとして扱う)
pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| panic!("{year}-{:02} is outside the supported calendar range", month + 1))
}

/// その月の末日
/// 12月は翌年を経由しないので chrono の最終年でも求まる
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let last_day = if month == 11 {
        NaiveDate::from_ymd_opt(year, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(year, month + 2, 1).and_then(|d| d.pred_opt())
    };
    last_day
        .unwrap_or_else(|| panic!("{year}-{:02} is outside the supported calendar range", month + 1))
}

/// 月名 例: "November"
pub fn month_name(year: i32, month: u32) -> String {
    first_day_of_month(year, month).format("%B").to_string()
}

/// 指定された年・月にかかる週を順番に返す
/// ※ month: 0 (1月) 〜 11 (12月), 範囲外は前後の年へ繰り越す
/// ※ 日曜始まり
///
/// 1日以前の直近の日曜から始め、週の終わりが月末に届くまで7日ずつ進める.
/// 最後の週は翌月にはみ出すことがある. 結果は必ず1週以上.
///
/// ```text
///     November 2025
/// Su Mo Tu We Th Fr Sa
/// 26 27 28 29 30 31  1   W1 (Oct 26 - Nov 1)
///  2  3  4  5  6  7  8   W2
///  9 10 11 12 13 14 15   W3
/// 16 17 18 19 20 21 22   W4
/// 23 24 25 26 27 28 29   W5
/// 30  1  2  3  4  5  6   W6 (Nov 30 - Dec 6)
/// ```
pub fn weeks_in_month(year: i32, month: i32) -> Vec<CalendarWeek> {
    let (year, month) = normalize_month(year, month);
    let first_day = first_day_of_month(year, month);
    let last_day = last_day_of_month(year, month);

    let mut start =
        first_day - Duration::days(i64::from(first_day.weekday().num_days_from_sunday()));
    let mut weeks = Vec::with_capacity(6);

    loop {
        let week = CalendarWeek::starting_at(weeks.len() as u32 + 1, start);
        let covered = week.end >= last_day;
        weeks.push(week);
        if covered {
            break;
        }
        start = start + Duration::days(7);
    }

    debug!(
        "event=weeks_in_month year={} month={} weeks={}",
        year,
        month + 1,
        weeks.len()
    );
    weeks
}

/// today を含む最初の週の index
/// 見つからなければ None (別の月を表示している場合など)
pub fn locate_today(weeks: &[CalendarWeek], today: NaiveDate) -> Option<usize> {
    weeks.iter().position(|week| week.contains(today))
}

/// locate_today の結果を表示用に丸める (見つからなければ 0)
pub fn current_week_index(weeks: &[CalendarWeek], today: NaiveDate) -> usize {
    locate_today(weeks, today).unwrap_or(0)
}

/// 基準週からの経過週数
///
/// 基準週 = 0, 前の週 = -1, 次の週 = 1.
/// Duration::num_weeks は 0 方向に切り捨てるので使わない.
pub fn absolute_week_offset(week: &CalendarWeek, reference_date: NaiveDate) -> AbsWeek {
    (week.start - reference_date).num_days().div_euclid(7)
}

/// 月内の週移動. 範囲外なら None
pub fn step_week(current: usize, delta: i64, len: usize) -> Option<usize> {
    let next = i64::try_from(current).ok()?.checked_add(delta)?;
    usize::try_from(next).ok().filter(|next| *next < len)
}

/// 前後の週へ移動する (月末・月初では隣の月へ)
/// 戻り値は (年, 月 0-11, 週 index)
///
/// 境界の週は前後の月の両方に含まれるので、隣の月では日付で探し直す.
/// 同じ週を2回表示しないため.
pub fn adjacent_week(
    year: i32,
    month: u32,
    index: usize,
    forward: bool,
) -> Option<(i32, u32, usize)> {
    let delta = if forward { 1 } else { -1 };
    let weeks = weeks_in_month(year, month as i32);
    let current = weeks.get(index)?;

    if let Some(next) = step_week(index, delta, weeks.len()) {
        return Some((year, month, next));
    }

    let target = current.start + Duration::days(7 * delta);
    let (year, month) = step_month(year, month, delta)?;
    let index = locate_today(&weeks_in_month(year, month as i32), target)?;
    Some((year, month, index))
}
