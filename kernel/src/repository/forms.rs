use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::event::SubmitBooking;

/// Outbound gateway to the external form-processing service. The engine only
/// produces the payload; delivery, retries and storage are the service's
/// concern.
#[async_trait]
pub trait FormsGateway: Send + Sync {
    async fn submit(&self, event: SubmitBooking) -> AppResult<()>;
}
