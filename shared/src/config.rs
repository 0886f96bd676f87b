use anyhow::Result;

#[derive(Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub forms: FormsConfig,
    pub pricing: PricingConfig,
    pub hours: HoursConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        };
        let forms = FormsConfig {
            endpoint: std::env::var("FORMS_ENDPOINT")
                .unwrap_or_else(|_| "https://formspree.io/f/xwpakqdg".into()),
        };
        let pricing = PricingConfig {
            hourly_rate: std::env::var("HOURLY_RATE")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(99),
        };
        let hours = HoursConfig {
            open_hour: std::env::var("OPEN_HOUR")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(9),
            close_hour: std::env::var("CLOSE_HOUR")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(22),
        };
        Ok(Self {
            server,
            forms,
            pricing,
            hours,
        })
    }
}

#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct FormsConfig {
    /// Endpoint of the external form-processing service bookings are
    /// forwarded to.
    pub endpoint: String,
}

#[derive(Clone)]
pub struct PricingConfig {
    /// Flat session rate per hour, in the smallest currency unit.
    pub hourly_rate: u32,
}

#[derive(Clone)]
pub struct HoursConfig {
    pub open_hour: u32,
    pub close_hour: u32,
}
