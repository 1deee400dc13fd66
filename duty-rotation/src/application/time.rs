use chrono::{Datelike, Local, NaiveDate};

/// ローカル時刻での今日 (時刻は切り捨て)
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// 日付から (年, 月 0-11) を取り出す
pub fn year_month0(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month0())
}
