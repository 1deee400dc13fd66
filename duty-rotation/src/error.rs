use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::roster_model::PhaseOffset;

/// 設定の不整合エラー
/// 起動時の検証でのみ返す (割り当て計算中には発生しない)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 当番リストが空
    #[error("duty list is empty")]
    EmptyDuties,

    /// メンバーリストが空
    #[error("member list is empty")]
    EmptyMembers,

    #[error("member `{name}` has phase offset {offset} outside [0, {duty_count})")]
    OffsetOutOfRange {
        name: String,
        offset: PhaseOffset,
        duty_count: usize,
    },

    /// 同じ週に2人が同じ当番になってしまう
    #[error("members `{first}` and `{second}` share phase offset {offset} (mod {duty_count})")]
    DuplicateOffset {
        first: String,
        second: String,
        offset: PhaseOffset,
        duty_count: usize,
    },

    /// 基準日が日曜でないと基準週の絶対週番号が 0 にならない
    #[error("reference date {0} is a {weekday}, expected a Sunday", weekday = .0.format("%A"))]
    ReferenceNotSunday(NaiveDate),

    #[error("member name `{0}` is configured more than once")]
    DuplicateMember(String),

    #[error("duty name `{0}` is configured more than once")]
    DuplicateDuty(String),

    #[error("basin order names unknown member `{0}`")]
    UnknownBasinMember(String),

    #[error("failed to access config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 問い合わせ側のエラー
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("member index {index} is out of range ({count} members)")]
    UnknownMember { index: usize, count: usize },

    #[error("no member named `{0}`")]
    MemberNotFound(String),

    #[error("week index {index} is out of range for {year}-{month:02} ({count} weeks)")]
    WeekOutOfRange {
        year: i32,
        /// 1-12 で表示する
        month: u32,
        index: usize,
        count: usize,
    },

    #[error("failed to render report: {0}")]
    Render(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
