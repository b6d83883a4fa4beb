use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    pub gateway_url: String,
    pub gateway_request_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("PLING_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("PLING_CORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("PLING_CORE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("PLING_CORE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("PLING_CORE_DB_NAME")?;
        let max_http_content_len = Self::env_var("PLING_CORE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let gateway_url = Self::env_var("PLING_CORE_GATEWAY_URL")?;
        let gateway_request_timeout =
            Self::env_var("PLING_CORE_GATEWAY_REQUEST_TIMEOUT")?.parse()?;
        let gateway_request_timeout = Duration::from_secs(gateway_request_timeout);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            gateway_url,
            gateway_request_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
