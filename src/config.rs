use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub met_base_url: String,
    pub met_compact_path: String,
    pub user_agent: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            met_base_url: env::var("MET_BASE_URL")
                .unwrap_or_else(|_| "https://api.met.no".to_string()),
            met_compact_path: env::var("MET_COMPACT_PATH")
                .unwrap_or_else(|_| "/weatherapi/locationforecast/2.0/compact".to_string()),
            user_agent: env::var("APP_USER_AGENT").unwrap_or_else(|_| {
                format!("daily-forecast-server/{}", env!("CARGO_PKG_VERSION"))
            }),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number"))?,
        })
    }
}
