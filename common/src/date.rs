//! 日付表示
//!
//! "2026-02-20" → "Feb 20, 2026"（en-US 短縮形）

use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// YYYY-MM-DD を解析
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

/// 表示用の日付文字列
///
/// 日付はタイムゾーンを持たない暦日として扱うため、
/// 閲覧環境のオフセットで前日にずれることはない。
/// 解析できない値はそのまま返す。
pub fn format_report_date(value: &str) -> String {
    match parse_report_date(value) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}
