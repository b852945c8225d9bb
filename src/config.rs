use crate::Error;
use std::env::VarError;
use std::time::Duration;

pub const REQUIRED_VARIABLES: [&str; 1] = ["POSTOS_API_URL"];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,

    /// `None` leaves requests without a deadline.
    pub timeout: Option<Duration>,

    pub https_only: bool,
}

impl Config {
    pub fn new(base_url: &str) -> Config {
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
            https_only: false,
        }
    }

    pub fn env() -> Result<Config, Error> {
        let mut config = Config::new(&env("POSTOS_API_URL")?);

        if let Some(secs) = optional_env("POSTOS_TIMEOUT_SECS")? {
            let secs = secs.parse::<u64>().map_err(|_| {
                Error::Unspecified(format!(
                    "POSTOS_TIMEOUT_SECS must be a whole number of seconds, got \"{}\".",
                    secs
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(flag) = optional_env("POSTOS_HTTPS_ONLY")? {
            config.https_only = match flag.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(Error::Unspecified(format!(
                        "POSTOS_HTTPS_ONLY must be true or false, got \"{}\".",
                        other
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn log(&self) {
        log::info!("api url: {}", self.base_url);
        match self.timeout {
            Some(timeout) => log::info!("request timeout: {}s", timeout.as_secs()),
            None => log::info!("request timeout: none"),
        }
        log::info!("https only: {}", self.https_only);
    }
}

fn env(name: &str) -> Result<String, Error> {
    match optional_env(name)? {
        Some(value) => Ok(value),
        None => Err(Error::Unspecified(format!("{} not set", name))),
    }
}

fn optional_env(name: &str) -> Result<Option<String>, Error> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::Unspecified(format!(
            "{} value is not valid unicode",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let config = Config::new("http://10.0.2.2:3000/");
        assert_eq!(config.base_url, "http://10.0.2.2:3000");
        assert_eq!(config.timeout, None);
        assert!(!config.https_only);
    }
}
