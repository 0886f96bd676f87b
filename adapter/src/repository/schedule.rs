use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use kernel::repository::schedule::ScheduleRepository;
use shared::error::AppResult;
use tokio::sync::RwLock;

/// In-memory schedule store. Bookings are not persisted (submission is
/// delegated to the external form service), so this only tracks slots taken
/// during the process lifetime to answer availability queries.
#[derive(Default)]
pub struct ScheduleRepositoryImpl {
    booked: RwLock<HashMap<NaiveDate, HashSet<String>>>,
}

impl ScheduleRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn booked_slots(&self, date: NaiveDate) -> AppResult<HashSet<String>> {
        let booked = self.booked.read().await;
        Ok(booked.get(&date).cloned().unwrap_or_default())
    }

    async fn mark_booked(&self, date: NaiveDate, slot_id: &str) -> AppResult<()> {
        let mut booked = self.booked.write().await;
        booked.entry(date).or_default().insert(slot_id.to_string());
        Ok(())
    }
}
