use crate::domain::roster_model::{AbsWeek, Duty, Member, PhaseOffset};
use crate::error::ConfigError;

/// 当番ローテーションの計算器
///
/// 当番リストを保持するだけの不変値. 呼び出し間で状態は変化しない.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEngine {
    duties: Vec<Duty>,
}

impl RotationEngine {
    /// 当番リストが空だと剰余が定義できないので拒否する
    pub fn new(duties: Vec<Duty>) -> Result<Self, ConfigError> {
        if duties.is_empty() {
            return Err(ConfigError::EmptyDuties);
        }
        Ok(Self { duties })
    }

    pub fn duties(&self) -> &[Duty] {
        &self.duties
    }

    pub fn duty_count(&self) -> usize {
        self.duties.len()
    }

    /// (phase_offset + abs_week) mod N を常に非負で返す
    ///
    /// ```text
    /// N = 5
    /// abs_week        : -2 -1  0  1  2  3  4  5
    /// phase_offset = 0:  3  4  0  1  2  3  4  0
    /// phase_offset = 2:  0  1  2  3  4  0  1  2
    /// ```
    pub fn duty_index(&self, phase_offset: PhaseOffset, abs_week: AbsWeek) -> usize {
        let n = self.duties.len() as i64;
        // 加算前に畳んでおけば極端な abs_week でも溢れない
        (phase_offset.rem_euclid(n) + abs_week.rem_euclid(n)).rem_euclid(n) as usize
    }

    /// 指定した週にメンバーが担当する当番
    pub fn assign(&self, member: &Member, abs_week: AbsWeek) -> &Duty {
        &self.duties[self.duty_index(member.phase_offset, abs_week)]
    }
}
