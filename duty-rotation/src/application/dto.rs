use serde::Serialize;

use crate::domain::roster_model::AbsWeek;
use crate::domain::week_calendar::CalendarWeek;

/// 1人分の当番 (表示用)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDutyDto {
    pub member: String,
    /// 正式名
    pub duty: String,
    /// 訳語 (無ければ正式名)
    pub duty_display: String,
}

/// 1週間分のチーム一覧
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekAssignments {
    pub year: i32,
    /// 0-11
    pub month: u32,
    pub week_index: usize,
    pub week: CalendarWeek,
    pub absolute_week: AbsWeek,
    /// 今日を含む週なら true ("NOW" 表示)
    pub is_now: bool,
    pub assignments: Vec<MemberDutyDto>,
}

/// メンバー個人の月間予定の1行
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRowDto {
    pub week: CalendarWeek,
    pub duty: String,
    pub duty_display: String,
    /// 表示中の週
    pub is_current: bool,
}

/// メンバー個人の月間予定
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSchedule {
    pub member: String,
    pub year: i32,
    pub month: u32,
    pub current_duty: String,
    pub rows: Vec<ScheduleRowDto>,
}

/// 月間レポート (1行 = 1メンバー, 1列 = 1週)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRosterReport {
    /// 例: "November 2025"
    pub title: String,
    pub year: i32,
    pub month: u32,
    /// 先頭は "Member", 以降は "W1 (26-1)" のような週見出し
    pub headers: Vec<String>,
    pub week_labels: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
