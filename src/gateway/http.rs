//! HTTP implementations of the gateway seams.
//!
//! Calls are blocking and carry no client timeout: the wizard runs one
//! action at a time and the spec accepts the hung-call risk. Wire DTOs keep
//! the collaborators' column names and convert to the domain types here.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::GatewayConfig;
use crate::domain::{ResolvedAddress, StudentRecord};
use crate::errors::GatewayError;
use crate::gateway::{AddressDirectory, IntakeEndpoint, StudentDirectory};

/// Student lookup against a PostgREST-style store: equality filter on the
/// guardian tax-ID column, all matching rows returned.
pub struct RestStudentDirectory {
    client: Client,
    base_url: String,
    filter_column: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StudentRow {
    #[serde(rename = "aluno")]
    name: String,
    #[serde(rename = "codigo_aluno")]
    student_code: i64,
    #[serde(rename = "curso_aluno")]
    course: String,
    #[serde(rename = "CPF_resp_fin")]
    guardian_tax_id: String,
    #[serde(rename = "whatsapp_fin")]
    contact_phone: String,
    #[serde(rename = "email_resp")]
    contact_email: String,
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        Self {
            name: row.name,
            student_code: row.student_code,
            course: row.course,
            guardian_tax_id: row.guardian_tax_id,
            contact_phone: row.contact_phone,
            contact_email: row.contact_email,
        }
    }
}

impl RestStudentDirectory {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.lookup_url.clone(),
            filter_column: config.lookup_filter_column.clone(),
            api_key: config.lookup_api_key.clone(),
        }
    }
}

impl StudentDirectory for RestStudentDirectory {
    fn find_by_guardian_tax_id(
        &self,
        digits: &str,
    ) -> Result<Vec<StudentRecord>, GatewayError> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[(self.filter_column.as_str(), format!("eq.{digits}"))]);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key);
        }
        let response = request
            .send()
            .map_err(|err| GatewayError::LookupUnavailable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(GatewayError::LookupUnavailable(format!(
                "store answered {}",
                response.status()
            )));
        }
        let rows: Vec<StudentRow> = response
            .json()
            .map_err(|err| GatewayError::LookupUnavailable(err.to_string()))?;
        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }
}

/// ViaCEP-style postal lookup. A body carrying `"erro": true` is the
/// not-found sentinel; the HTTP status stays 200 in that case.
pub struct ViaCepAddressDirectory {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CepRow {
    #[serde(default)]
    erro: bool,
    #[serde(default, rename = "logradouro")]
    street: String,
    #[serde(default, rename = "bairro")]
    district: String,
    #[serde(default, rename = "localidade")]
    city: String,
    #[serde(default, rename = "uf")]
    region: String,
}

impl ViaCepAddressDirectory {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.address_url.clone(),
        }
    }
}

impl AddressDirectory for ViaCepAddressDirectory {
    fn resolve(&self, digits: &str) -> Result<Option<ResolvedAddress>, GatewayError> {
        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), digits);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| GatewayError::AddressLookupUnavailable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(GatewayError::AddressLookupUnavailable(format!(
                "directory answered {}",
                response.status()
            )));
        }
        let row: CepRow = response
            .json()
            .map_err(|err| GatewayError::AddressLookupUnavailable(err.to_string()))?;
        if row.erro {
            return Ok(None);
        }
        Ok(Some(ResolvedAddress {
            street: row.street,
            district: row.district,
            city: row.city,
            region: row.region,
        }))
    }
}

/// Intake webhook: one POST, 2xx is success, anything else is a rejection.
pub struct WebhookIntake {
    client: Client,
    url: String,
}

impl WebhookIntake {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.intake_url.clone(),
        }
    }
}

impl IntakeEndpoint for WebhookIntake {
    fn submit(&self, payload: &serde_json::Value) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .map_err(|err| GatewayError::SubmissionUnavailable(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::SubmissionRejected {
                status: status.as_u16(),
            })
        }
    }
}
