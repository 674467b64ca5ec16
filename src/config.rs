use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub http_timeout_secs: u64,
    pub google_auth_url: String,
    pub facebook_auth_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = env::var("API_URL").unwrap_or_else(|_| "http://localhost:1337".to_string());
        let api_url = api_url.trim_end_matches('/').to_string();

        Self {
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("HTTP_TIMEOUT_SECS must be a number"),
            google_auth_url: format!("{}/auth/google", api_url),
            facebook_auth_url: format!("{}/auth/facebook", api_url),
            api_url,
        }
    }

    pub fn with_api_url(api_url: &str) -> Self {
        let api_url = api_url.trim_end_matches('/').to_string();
        Self {
            http_timeout_secs: 30,
            google_auth_url: format!("{}/auth/google", api_url),
            facebook_auth_url: format!("{}/auth/facebook", api_url),
            api_url,
        }
    }
}
