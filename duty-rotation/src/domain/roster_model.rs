// =====================
// ドメインモデル定義
// =====================

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// 絶対週番号と位相オフセットの型エイリアス
// 基準週より前の週は負になる
pub type AbsWeek = i64;
pub type PhaseOffset = i64;

/// 基準週 (日曜始まり)
/// この週に phase_offset = 0 のメンバーが当番リストの先頭を担当する
pub const DEFAULT_REFERENCE_DATE: (i32, u32, u32) = (2025, 11, 9);

pub fn default_reference_date() -> NaiveDate {
    let (year, month, day) = DEFAULT_REFERENCE_DATE;
    NaiveDate::from_ymd_opt(year, month, day).expect("reference date is a valid calendar date")
}

/// 当番を担当するメンバー
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    /// ローテーション上の位置 [0, 当番数)
    pub phase_offset: PhaseOffset,
}

impl Member {
    pub fn new(name: &str, phase_offset: PhaseOffset) -> Self {
        Self {
            name: name.to_string(),
            phase_offset,
        }
    }
}

/// 当番
/// name が正式名、translation はレポート用の表示名
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Duty {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl Duty {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            translation: None,
        }
    }

    pub fn with_translation(name: &str, translation: &str) -> Self {
        Self {
            name: name.to_string(),
            translation: Some(translation.to_string()),
        }
    }

    /// 訳語があれば訳語、無ければ正式名
    pub fn display_name(&self) -> &str {
        self.translation.as_deref().unwrap_or(&self.name)
    }
}

/// ローテーション設定 (メイン構造体)
///
/// members / duties の並び順がそのまま意味を持つ.
/// duties の順番がローテーションの進む方向になる.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterConfig {
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,
    pub members: Vec<Member>,
    pub duties: Vec<Duty>,
    /// 洗面台掃除の順番 (メンバー名)
    #[serde(default)]
    pub basin_order: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            members: vec![
                Member::new("PREM MANDAL", 0),
                Member::new("KESHAV KUMAR", 1),
                Member::new("SUMIT KUMAR", 2),
                Member::new("SANJIT KUMAR", 3),
                Member::new("UTTAM MANDAL", 4),
            ],
            duties: vec![
                Duty::with_translation("पोछा लगाना", "Mopping"),
                Duty::with_translation("झाड़ू लगाना", "Sweeping"),
                Duty::with_translation("सब्जी लाना", "Vegetables"),
                Duty::with_translation("पानी लाना", "Water"),
                Duty::with_translation("कचरा फेंकना", "Garbage"),
            ],
            basin_order: vec![
                "KESHAV KUMAR".to_string(),
                "UTTAM MANDAL".to_string(),
                "SANJIT KUMAR".to_string(),
                "SUMIT KUMAR".to_string(),
                "PREM MANDAL".to_string(),
            ],
        }
    }
}

impl RosterConfig {
    /// 起動時の設定チェック
    ///
    /// 位相オフセットが当番数を法として重複していると
    /// 同じ週に同じ当番が2人に割り当てられ、別の当番が誰にも割り当てられない.
    /// 割り当て計算側はこれを検査しないので、ここで必ず弾く.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duties.is_empty() {
            return Err(ConfigError::EmptyDuties);
        }
        if self.members.is_empty() {
            return Err(ConfigError::EmptyMembers);
        }
        if self.reference_date.weekday() != Weekday::Sun {
            return Err(ConfigError::ReferenceNotSunday(self.reference_date));
        }

        let mut duty_names = HashSet::new();
        for duty in &self.duties {
            if !duty_names.insert(duty.name.as_str()) {
                return Err(ConfigError::DuplicateDuty(duty.name.clone()));
            }
        }

        let duty_count = self.duties.len();
        let mut names = HashSet::new();
        // offset mod N -> 最初にその位置を使ったメンバー名
        let mut seen_offsets: HashMap<PhaseOffset, &str> = HashMap::new();

        for member in &self.members {
            if !names.insert(member.name.as_str()) {
                return Err(ConfigError::DuplicateMember(member.name.clone()));
            }

            if member.phase_offset < 0 || member.phase_offset >= duty_count as PhaseOffset {
                return Err(ConfigError::OffsetOutOfRange {
                    name: member.name.clone(),
                    offset: member.phase_offset,
                    duty_count,
                });
            }

            let slot = member.phase_offset.rem_euclid(duty_count as PhaseOffset);
            if let Some(first) = seen_offsets.insert(slot, member.name.as_str()) {
                return Err(ConfigError::DuplicateOffset {
                    first: first.to_string(),
                    second: member.name.clone(),
                    offset: slot,
                    duty_count,
                });
            }
        }

        for name in &self.basin_order {
            if !names.contains(name.as_str()) {
                return Err(ConfigError::UnknownBasinMember(name.clone()));
            }
        }

        if self.members.len() < duty_count {
            warn!(
                "event=config_validate status=warn members={} duties={} detail=some duties stay unassigned each week",
                self.members.len(),
                duty_count
            );
        }

        Ok(())
    }

    pub fn duty_count(&self) -> usize {
        self.duties.len()
    }
}
