/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Convert a millisecond span into fractional hours.
pub fn millis_to_hours(millis: i128) -> f64 {
    millis as f64 / crate::types::MILLIS_PER_HOUR
}
