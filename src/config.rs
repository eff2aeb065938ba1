use serde::Deserialize;

/// Origins allowed to read responses cross-site when no override is configured.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://hubhoian.com",
    "https://www.hubhoian.com",
    "https://entrepreneursummer.com",
    "https://www.entrepreneursummer.com",
];

/// How the handler acknowledges a submission relative to the insert outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Await the insert, log failures, always acknowledge with 200.
    BestEffort,
    /// Surface an insert failure as the error response instead of a success.
    Confirmed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_service_role_key: String,
    pub port: u16,
    /// Exact-match CORS allow-list. Empty disables CORS handling entirely.
    pub cors_allowed_origins: Vec<String>,
    /// Generate `created_at` server-side; when false the store default applies.
    pub generate_timestamp: bool,
    pub write_policy: WritePolicy,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            supabase_url: std::env::var("SUPABASE_URL")
                .map_err(|_| anyhow::anyhow!("SUPABASE_URL environment variable required"))
                .and_then(|raw| {
                    if raw.trim().is_empty() {
                        anyhow::bail!("SUPABASE_URL cannot be empty");
                    }
                    let parsed = url::Url::parse(&raw)
                        .map_err(|e| anyhow::anyhow!("SUPABASE_URL is not a valid URL: {}", e))?;
                    if parsed.scheme() != "http" && parsed.scheme() != "https" {
                        anyhow::bail!("SUPABASE_URL must start with http:// or https://");
                    }
                    Ok(raw.trim_end_matches('/').to_string())
                })?,
            supabase_service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY")
                .map_err(|_| {
                    anyhow::anyhow!("SUPABASE_SERVICE_ROLE_KEY environment variable required")
                })
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("SUPABASE_SERVICE_ROLE_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            cors_allowed_origins: match std::env::var("CORS_ALLOWED_ORIGINS") {
                Ok(raw) => raw
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                Err(_) => DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            generate_timestamp: parse_bool_env("GENERATE_TIMESTAMP", true)?,
            write_policy: match std::env::var("WRITE_POLICY")
                .unwrap_or_else(|_| "best-effort".to_string())
                .as_str()
            {
                "best-effort" => WritePolicy::BestEffort,
                "confirmed" => WritePolicy::Confirmed,
                other => anyhow::bail!(
                    "WRITE_POLICY must be 'best-effort' or 'confirmed', got '{}'",
                    other
                ),
            },
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Supabase URL: {}", config.supabase_url);
        tracing::debug!(
            "CORS origins: {:?}, generate_timestamp: {}, write_policy: {:?}",
            config.cors_allowed_origins,
            config.generate_timestamp,
            config.write_policy
        );
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Exact string match against the allow-list; no wildcard or suffix rules.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.cors_allowed_origins.iter().any(|allowed| allowed == origin)
    }

    pub fn cors_enabled(&self) -> bool {
        !self.cors_allowed_origins.is_empty()
    }
}

fn parse_bool_env(key: &str, default: bool) -> anyhow::Result<bool> {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => anyhow::bail!("{} must be 'true' or 'false', got '{}'", key, other),
        },
        Err(_) => Ok(default),
    }
}
