use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid port number"),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "https://rihlama.com".to_string()),
        }
    }
}
