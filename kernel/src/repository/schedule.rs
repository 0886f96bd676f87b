use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

/// Authoritative source of slot availability per calendar date. Availability
/// is always derived from this store; slot generation itself is pure and
/// knows nothing about bookings.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // 指定日の予約済みスロットIDを取得する
    async fn booked_slots(&self, date: NaiveDate) -> AppResult<HashSet<String>>;
    // スロットを予約済みにする
    async fn mark_booked(&self, date: NaiveDate, slot_id: &str) -> AppResult<()>;
}
