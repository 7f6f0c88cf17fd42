//! Automation operations.

use super::ListParams;
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::PaginatedResponse;
use crate::types::{Automation, AutomationRun, AutomationTrigger};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/automations/v1";

/// Service for automation operations.
pub struct AutomationsService<'a> {
    client: &'a IconikClient,
}

impl<'a> AutomationsService<'a> {
    /// Creates a new automations service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Lists one page of automations.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Automation>>> {
        self.client
            .get(SERVER_PREFIX, "automations/", params.to_query())
            .await
    }

    /// Gets an automation.
    pub async fn get(&self, automation_id: &str) -> IconikResult<ApiResponse<Automation>> {
        self.client
            .get(
                SERVER_PREFIX,
                &format!("automations/{}/", automation_id),
                Vec::new(),
            )
            .await
    }

    /// Creates an automation.
    pub async fn create(
        &self,
        body: impl Into<Body<AutomationCreate>>,
    ) -> IconikResult<ApiResponse<Automation>> {
        self.client
            .post(SERVER_PREFIX, "automations/", &body.into())
            .await
    }

    /// Partially updates an automation.
    pub async fn update(
        &self,
        automation_id: &str,
        body: impl Into<Body<AutomationUpdate>>,
    ) -> IconikResult<ApiResponse<Automation>> {
        self.client
            .patch(
                SERVER_PREFIX,
                &format!("automations/{}/", automation_id),
                &body.into(),
            )
            .await
    }

    /// Deletes an automation.
    pub async fn delete(&self, automation_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("automations/{}/", automation_id))
            .await
    }

    /// Starts an automation manually.
    pub async fn run(&self, automation_id: &str) -> IconikResult<ApiResponse<AutomationRun>> {
        let body: Body<()> = Body::Raw(serde_json::Map::new());
        self.client
            .post(
                SERVER_PREFIX,
                &format!("automations/{}/run/", automation_id),
                &body,
            )
            .await
    }
}

/// Request to create an automation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AutomationCreate {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Trigger starting the automation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<AutomationTrigger>,
    /// Whether the automation starts enabled.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enabled: bool,
    /// Ordered action definitions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<serde_json::Value>,
}

/// Partial update of an automation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AutomationUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Enabled flag.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub enabled: Field<bool>,
    /// Ordered action definitions.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub actions: Field<Vec<serde_json::Value>>,
}
