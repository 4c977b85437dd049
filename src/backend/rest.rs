use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::{
    backend::{query::RestQuery, AuditBackend},
    config::Config,
    error::BackendError,
    model::{
        api::ErrorDto,
        assignment::{AssignmentStatus, AuditAssignment},
        finding::{EntityType, Finding, FindingPatch, FindingStatus, NewFinding},
        identity::Identity,
    },
};

pub const PROFILES_TABLE: &str = "profiles";
pub const ASSIGNMENTS_TABLE: &str = "audit_assignments";
pub const FINDINGS_TABLE: &str = "audit_findings";

/// Path of the REST gateway below the backend base URL
const REST_PATH: &str = "/rest/v1/";

/// Columns selected by the active assignment listing, embedding the company row
const ASSIGNMENT_COLUMNS: &str = "*,company:companies(id,name,logo_url)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

/// Fully described request, built without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
}

/// Backend client for the platform's REST gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestBackend {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl RestBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            anon_key: config.backend_anon_key.clone(),
            access_token: None,
        }
    }

    /// Sends requests on behalf of the signed-in user so the backend's row
    /// level policies apply to them.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, REST_PATH, path)
    }

    fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.access_token.as_deref().unwrap_or(&self.anon_key)
        )
    }

    #[cfg(feature = "web")]
    async fn send(&self, request: RestRequest) -> Result<(u16, String), BackendError> {
        use reqwasm::http::{Method, Request};

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
        };

        let mut builder = Request::new(&self.url(&request.path))
            .method(method)
            .header("apikey", &self.anon_key)
            .header("Authorization", &self.bearer())
            .header("Accept", "application/json");

        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .header("Prefer", "return=representation")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(format!("Failed to read response body: {}", e)))?;

        Ok((status, text))
    }

    #[cfg(not(feature = "web"))]
    async fn send(&self, _request: RestRequest) -> Result<(u16, String), BackendError> {
        Err(BackendError::Unsupported)
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        request: RestRequest,
        context: &str,
    ) -> Result<Vec<T>, BackendError> {
        let (status, body) = self.send(request).await?;
        parse_rows(status, &body, context)
    }

    async fn fetch_one<T: DeserializeOwned>(
        &self,
        request: RestRequest,
        context: &str,
    ) -> Result<T, BackendError> {
        self.fetch_rows(request, context)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::MissingRow(context.to_string()))
    }
}

/// `GET profiles?select=id,role,company_id&id=eq.<user>&limit=1`
pub fn identity_request(user_id: &str) -> RestRequest {
    get(RestQuery::from(PROFILES_TABLE)
        .select("id,role,company_id")
        .eq("id", user_id)
        .limit(1))
}

/// Assignments of an auditor that are scheduled or in progress and whose window
/// includes `today` (open-ended when `end_date` is null).
pub fn active_assignments_request(auditor_id: &str, today: NaiveDate) -> RestRequest {
    let today = today.format("%Y-%m-%d").to_string();

    get(RestQuery::from(ASSIGNMENTS_TABLE)
        .select(ASSIGNMENT_COLUMNS)
        .eq("auditor_id", auditor_id)
        .in_list(
            "status",
            AssignmentStatus::ACTIVE.iter().map(|status| status.as_str()),
        )
        .lte("start_date", &today)
        .or(&[
            "end_date.is.null".to_string(),
            format!("end_date.gte.{}", today),
        ]))
}

pub fn assignment_ids_request(company_id: &str) -> RestRequest {
    get(RestQuery::from(ASSIGNMENTS_TABLE)
        .select("id")
        .eq("company_id", company_id))
}

/// Non-closed findings of the given assignments, oldest first so the most
/// recent finding of an entity comes last.
pub fn open_findings_request(
    assignment_ids: &[String],
    entity_type: Option<EntityType>,
) -> RestRequest {
    let mut query = RestQuery::from(FINDINGS_TABLE)
        .select("*")
        .in_list("assignment_id", assignment_ids)
        .neq("status", FindingStatus::Closed.as_str());

    if let Some(entity_type) = entity_type {
        query = query.eq("entity_type", entity_type.as_str());
    }

    get(query.order("created_at", true))
}

pub fn insert_finding_request(finding: &NewFinding) -> Result<RestRequest, BackendError> {
    Ok(RestRequest {
        method: HttpMethod::Post,
        path: RestQuery::from(FINDINGS_TABLE).to_path(),
        body: Some(encode_body(finding, "insert finding")?),
    })
}

pub fn update_finding_request(
    finding_id: &str,
    patch: &FindingPatch,
) -> Result<RestRequest, BackendError> {
    Ok(RestRequest {
        method: HttpMethod::Patch,
        path: RestQuery::from(FINDINGS_TABLE)
            .eq("id", finding_id)
            .to_path(),
        body: Some(encode_body(patch, "update finding")?),
    })
}

fn get(query: RestQuery) -> RestRequest {
    RestRequest {
        method: HttpMethod::Get,
        path: query.to_path(),
        body: None,
    }
}

fn encode_body<T: serde::Serialize>(value: &T, context: &str) -> Result<String, BackendError> {
    serde_json::to_string(value).map_err(|e| BackendError::Parse {
        context: context.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a gateway response into rows.
///
/// # Returns
/// - `Ok(Vec<T>)` - 2xx with a JSON array body (empty body counts as no rows)
/// - `Ok(vec![])` - 404, the requested resource has no rows
/// - `Err(BackendError::Status)` - Any other status, with the gateway's error body when parsable
/// - `Err(BackendError::Parse)` - 2xx with a body that isn't an array of `T`
pub fn parse_rows<T: DeserializeOwned>(
    status: u16,
    body: &str,
    context: &str,
) -> Result<Vec<T>, BackendError> {
    match status {
        200..=299 => {
            if body.trim().is_empty() {
                return Ok(Vec::new());
            }

            serde_json::from_str::<Vec<T>>(body).map_err(|e| BackendError::Parse {
                context: context.to_string(),
                reason: e.to_string(),
            })
        }
        404 => Ok(Vec::new()),
        _ => {
            let error = serde_json::from_str::<ErrorDto>(body).unwrap_or_else(|_| ErrorDto {
                message: if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.to_string()
                },
                ..Default::default()
            });

            Err(BackendError::Status { status, error })
        }
    }
}

#[derive(serde::Deserialize)]
struct IdRow {
    id: String,
}

impl AuditBackend for RestBackend {
    async fn fetch_identity(&self, user_id: &str) -> Result<Option<Identity>, BackendError> {
        let rows: Vec<Identity> = self
            .fetch_rows(identity_request(user_id), "profile")
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn active_assignments(
        &self,
        auditor_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<AuditAssignment>, BackendError> {
        self.fetch_rows(
            active_assignments_request(auditor_id, today),
            "active audit assignments",
        )
        .await
    }

    async fn assignment_ids_for_company(
        &self,
        company_id: &str,
    ) -> Result<Vec<String>, BackendError> {
        let rows: Vec<IdRow> = self
            .fetch_rows(assignment_ids_request(company_id), "company assignment ids")
            .await?;

        Ok(rows.into_iter().map(|row| row.id).collect())
    }

    async fn open_findings(
        &self,
        assignment_ids: &[String],
        entity_type: Option<EntityType>,
    ) -> Result<Vec<Finding>, BackendError> {
        self.fetch_rows(
            open_findings_request(assignment_ids, entity_type),
            "open audit findings",
        )
        .await
    }

    async fn insert_finding(&self, finding: &NewFinding) -> Result<Finding, BackendError> {
        self.fetch_one(insert_finding_request(finding)?, "inserted finding")
            .await
    }

    async fn update_finding(
        &self,
        finding_id: &str,
        patch: &FindingPatch,
    ) -> Result<Finding, BackendError> {
        self.fetch_one(update_finding_request(finding_id, patch)?, "updated finding")
            .await
    }
}
