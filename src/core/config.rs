use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Tuning for the simulated report intake dispatcher.
///
/// The dispatcher stands in for a remote report-intake service; the delay
/// and acceptance rate model its latency and availability.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub delay: Duration,
    pub acceptance_rate: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            dispatch: DispatchConfig::from_env()?,
        })
    }
}

impl AppConfig {
    // Large enough for a batch of photo attachments (5MB each)
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 32 * 1024 * 1024; // 32MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Nagrik API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Nagrik".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl DispatchConfig {
    const DEFAULT_DELAY_MS: u64 = 2_000;
    const DEFAULT_ACCEPTANCE_RATE: f64 = 0.9;

    pub fn from_env() -> Result<Self, String> {
        let delay_ms = env::var("DISPATCH_DELAY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "DISPATCH_DELAY_MS must be a valid number".to_string())?;

        let acceptance_rate = env::var("DISPATCH_ACCEPTANCE_RATE")
            .unwrap_or_else(|_| Self::DEFAULT_ACCEPTANCE_RATE.to_string())
            .parse::<f64>()
            .map_err(|_| "DISPATCH_ACCEPTANCE_RATE must be a valid number".to_string())?;

        if !(0.0..=1.0).contains(&acceptance_rate) {
            return Err("DISPATCH_ACCEPTANCE_RATE must be between 0.0 and 1.0".to_string());
        }

        Ok(Self {
            delay: Duration::from_millis(delay_ms),
            acceptance_rate,
        })
    }
}
