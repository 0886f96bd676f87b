use async_trait::async_trait;
use kernel::model::booking::event::SubmitBooking;
use kernel::repository::forms::FormsGateway;
use shared::{config::FormsConfig, error::AppResult};

/// Forwards validated bookings to the external form-processing endpoint
/// (a Formspree-style service). Fire-and-forget: a non-2xx response is an
/// error, nothing is retried or stored locally.
pub struct FormsGatewayImpl {
    client: reqwest::Client,
    endpoint: String,
}

impl FormsGatewayImpl {
    pub fn new(cfg: &FormsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: cfg.endpoint.clone(),
        }
    }
}

#[async_trait]
impl FormsGateway for FormsGatewayImpl {
    async fn submit(&self, event: SubmitBooking) -> AppResult<()> {
        tracing::info!(reference = %event.reference, "forwarding booking to form service");

        self.client
            .post(&self.endpoint)
            .form(&event.to_form_fields())
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
