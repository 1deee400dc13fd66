use chrono::NaiveDate;
use log::{debug, info};

use crate::application::dto::{
    MemberDutyDto, MemberSchedule, MonthlyRosterReport, ScheduleRowDto, WeekAssignments,
};
use crate::domain::roster_model::{AbsWeek, Duty, Member, RosterConfig};
use crate::domain::rotation::RotationEngine;
use crate::domain::week_calendar::{
    absolute_week_offset, month_name, normalize_month, weeks_in_month, CalendarWeek,
};
use crate::error::{ConfigError, RosterError, RosterResult};

/// 検証済みの設定とローテーション計算器をまとめたもの
///
/// 画面表示・個人予定・レポートはすべてここを経由するので、
/// 同じ入力には必ず同じ当番が返る.
#[derive(Debug, Clone)]
pub struct Roster {
    config: RosterConfig,
    engine: RotationEngine,
}

impl Roster {
    pub fn new(config: RosterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = RotationEngine::new(config.duties.clone())?;

        info!(
            "event=roster_init status=ok members={} duties={} reference_date={}",
            config.members.len(),
            config.duties.len(),
            config.reference_date
        );

        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn engine(&self) -> &RotationEngine {
        &self.engine
    }

    pub fn members(&self) -> &[Member] {
        &self.config.members
    }

    pub fn member(&self, index: usize) -> RosterResult<&Member> {
        self.config
            .members
            .get(index)
            .ok_or(RosterError::UnknownMember {
                index,
                count: self.config.members.len(),
            })
    }

    /// 大文字小文字を区別せずに名前で探す
    pub fn find_member(&self, name: &str) -> RosterResult<(usize, &Member)> {
        let wanted = name.trim().to_lowercase();
        self.config
            .members
            .iter()
            .enumerate()
            .find(|(_, m)| m.name.to_lowercase() == wanted)
            .ok_or_else(|| RosterError::MemberNotFound(name.to_string()))
    }

    /// 基準週からの経過週数
    pub fn week_offset(&self, week: &CalendarWeek) -> AbsWeek {
        absolute_week_offset(week, self.config.reference_date)
    }

    /// 全ての割り当てはこの関数を通る
    fn duty_in_week(&self, member: &Member, week: &CalendarWeek) -> &Duty {
        self.engine.assign(member, self.week_offset(week))
    }

    fn resolve_week(
        &self,
        year: i32,
        month: i32,
        week_index: usize,
    ) -> RosterResult<(i32, u32, CalendarWeek)> {
        let (year, month) = normalize_month(year, month);
        let mut weeks = weeks_in_month(year, month as i32);
        let count = weeks.len();
        if week_index >= count {
            return Err(RosterError::WeekOutOfRange {
                year,
                month: month + 1,
                index: week_index,
                count,
            });
        }
        Ok((year, month, weeks.swap_remove(week_index)))
    }

    /// (メンバー, 年, 月 0-11, 月内の週 index) -> 当番
    pub fn duty_for_member_in_week(
        &self,
        member_index: usize,
        year: i32,
        month: i32,
        week_index: usize,
    ) -> RosterResult<&Duty> {
        let member = self.member(member_index)?;
        let (_, _, week) = self.resolve_week(year, month, week_index)?;
        Ok(self.duty_in_week(member, &week))
    }

    /// 1週間分のチーム一覧
    pub fn week_assignments(
        &self,
        year: i32,
        month: i32,
        week_index: usize,
        today: NaiveDate,
    ) -> RosterResult<WeekAssignments> {
        let (year, month, week) = self.resolve_week(year, month, week_index)?;
        let absolute_week = self.week_offset(&week);

        let assignments = self
            .config
            .members
            .iter()
            .map(|member| {
                let duty = self.duty_in_week(member, &week);
                MemberDutyDto {
                    member: member.name.clone(),
                    duty: duty.name.clone(),
                    duty_display: duty.display_name().to_string(),
                }
            })
            .collect();

        debug!(
            "event=week_assignments year={} month={} week={} abs_week={}",
            year,
            month + 1,
            week.sequence_number,
            absolute_week
        );

        Ok(WeekAssignments {
            year,
            month,
            week_index,
            is_now: week.is_now(today),
            week,
            absolute_week,
            assignments,
        })
    }

    /// メンバー個人の月間予定
    /// view_index は表示中の週 (その行に is_current を立てる)
    pub fn member_schedule(
        &self,
        member_index: usize,
        year: i32,
        month: i32,
        view_index: usize,
    ) -> RosterResult<MemberSchedule> {
        let member = self.member(member_index)?;
        let (_, _, viewed_week) = self.resolve_week(year, month, view_index)?;
        let (year, month) = normalize_month(year, month);

        let rows = weeks_in_month(year, month as i32)
            .into_iter()
            .enumerate()
            .map(|(index, week)| {
                let duty = self.duty_in_week(member, &week);
                ScheduleRowDto {
                    duty: duty.name.clone(),
                    duty_display: duty.display_name().to_string(),
                    is_current: index == view_index,
                    week,
                }
            })
            .collect();

        Ok(MemberSchedule {
            member: member.name.clone(),
            year,
            month,
            current_duty: self.duty_in_week(member, &viewed_week).name.clone(),
            rows,
        })
    }

    /// 月間レポート
    /// セルは訳語 (無ければ正式名)
    pub fn monthly_report(&self, year: i32, month: i32) -> MonthlyRosterReport {
        let (year, month) = normalize_month(year, month);
        let weeks = weeks_in_month(year, month as i32);

        let mut headers = Vec::with_capacity(weeks.len() + 1);
        headers.push("Member".to_string());
        headers.extend(weeks.iter().map(CalendarWeek::column_header));

        let rows = self
            .config
            .members
            .iter()
            .map(|member| {
                let mut row = Vec::with_capacity(weeks.len() + 1);
                row.push(member.name.clone());
                row.extend(
                    weeks
                        .iter()
                        .map(|week| self.duty_in_week(member, week).display_name().to_string()),
                );
                row
            })
            .collect();

        MonthlyRosterReport {
            title: format!("{} {}", month_name(year, month), year),
            year,
            month,
            headers,
            week_labels: weeks.iter().map(|w| w.label.clone()).collect(),
            rows,
        }
    }
}
