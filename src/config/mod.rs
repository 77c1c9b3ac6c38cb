use std::env;

const DEFAULT_ADDRESS_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_FILTER_COLUMN: &str = "CPF_resp_fin";

/// Endpoint addresses for the three gateways.
///
/// Environment overrides are the only configuration surface the wizard
/// carries; everything else is fixed behavior.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Student-record store endpoint (PostgREST-style table URL).
    pub lookup_url: String,
    /// Column the equality filter runs against.
    pub lookup_filter_column: String,
    /// Optional api key sent as the `apikey` header.
    pub lookup_api_key: Option<String>,
    /// Postal-code directory base URL.
    pub address_url: String,
    /// Intake webhook URL.
    pub intake_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            lookup_url: String::new(),
            lookup_filter_column: DEFAULT_FILTER_COLUMN.into(),
            lookup_api_key: None,
            address_url: DEFAULT_ADDRESS_URL.into(),
            intake_url: String::new(),
        }
    }
}

impl GatewayConfig {
    /// Reads `PASSE_LOOKUP_URL`, `PASSE_LOOKUP_COLUMN`, `PASSE_LOOKUP_API_KEY`,
    /// `PASSE_ADDRESS_URL`, and `PASSE_INTAKE_URL` over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var("PASSE_LOOKUP_URL") {
            config.lookup_url = value;
        }
        if let Ok(value) = env::var("PASSE_LOOKUP_COLUMN") {
            config.lookup_filter_column = value;
        }
        if let Ok(value) = env::var("PASSE_LOOKUP_API_KEY") {
            config.lookup_api_key = Some(value);
        }
        if let Ok(value) = env::var("PASSE_ADDRESS_URL") {
            config.address_url = value;
        }
        if let Ok(value) = env::var("PASSE_INTAKE_URL") {
            config.intake_url = value;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_postal_directory() {
        let config = GatewayConfig::default();
        assert_eq!(config.address_url, "https://viacep.com.br/ws");
        assert_eq!(config.lookup_filter_column, "CPF_resp_fin");
        assert!(config.lookup_api_key.is_none());
    }
}
