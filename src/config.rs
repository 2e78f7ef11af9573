use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub log_level: String,
    pub bootstrap_login: String,
    pub bootstrap_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("CADASTRO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CADASTRO_HOST: {e}"))?;

        let port: u16 = env_or("CADASTRO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid CADASTRO_PORT: {e}"))?;

        let base_url = env_or("CADASTRO_BASE_URL", &format!("http://{host}:{port}"));

        let log_level = env_or("CADASTRO_LOG_LEVEL", "info");

        // Quick-start convenience: a fresh database gets exactly one admin
        // account with these credentials. Override both in production.
        let bootstrap_login = env_or("CADASTRO_BOOTSTRAP_LOGIN", "admin");
        let bootstrap_password = env_or("CADASTRO_BOOTSTRAP_PASSWORD", "123456");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            base_url,
            log_level,
            bootstrap_login,
            bootstrap_password,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
