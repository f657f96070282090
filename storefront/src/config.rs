use std::env;
use std::path::PathBuf;

/// Default number of opened certificates kept in the outbox
pub const DEFAULT_CERTIFICATE_OUTBOX_CAPACITY: usize = 32;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// ISO 4217 code used when formatting prices
    pub currency_code: String,
    /// How many opened certificates stay retrievable; 0 blocks certificates entirely
    pub certificate_outbox_capacity: usize,
    /// Optional JSON inventory replacing the built-in catalog and familiars
    pub inventory_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            currency_code: "USD".to_string(),
            certificate_outbox_capacity: DEFAULT_CERTIFICATE_OUTBOX_CAPACITY,
            inventory_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            currency_code: env::var("CURRENCY_CODE")
                .map(|c| c.trim().to_uppercase())
                .ok()
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.currency_code),
            certificate_outbox_capacity: env::var("CERTIFICATE_OUTBOX_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.certificate_outbox_capacity),
            inventory_path: env::var("INVENTORY_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Check if certificates can be opened at all
    pub fn certificates_enabled(&self) -> bool {
        self.certificate_outbox_capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.port, 8080);
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.certificate_outbox_capacity, 32);
        assert!(config.inventory_path.is_none());
        assert!(config.certificates_enabled());
    }

    #[test]
    fn zero_capacity_disables_certificates() {
        let config = Config {
            certificate_outbox_capacity: 0,
            ..Config::default()
        };

        assert!(!config.certificates_enabled());
    }
}
