//! Job operations.

use super::{page_query, ListParams};
use crate::body::{Body, Field};
use crate::client::IconikClient;
use crate::envelope::ApiResponse;
use crate::errors::IconikResult;
use crate::pagination::{PaginatedResponse, Paginator};
use crate::types::{Job, JobStatus, JobType};
use serde::Serialize;

const SERVER_PREFIX: &str = "API/jobs/v1";

/// Service for job operations.
pub struct JobsService<'a> {
    client: &'a IconikClient,
}

impl<'a> JobsService<'a> {
    /// Creates a new jobs service.
    pub fn new(client: &'a IconikClient) -> Self {
        Self { client }
    }

    /// Gets a job.
    pub async fn get(&self, job_id: &str) -> IconikResult<ApiResponse<Job>> {
        self.client
            .get(SERVER_PREFIX, &format!("jobs/{}/", job_id), Vec::new())
            .await
    }

    /// Lists one page of jobs.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> IconikResult<ApiResponse<PaginatedResponse<Job>>> {
        self.client
            .get(SERVER_PREFIX, "jobs/", params.to_query())
            .await
    }

    /// Lists every job through the pagination engine.
    pub async fn list_all(&self) -> IconikResult<PaginatedResponse<Job>> {
        let client = self.client;
        let paginator = Paginator::new(client.config().pagination.clone());
        paginator
            .collect_all(move |query| async move {
                client
                    .get::<PaginatedResponse<Job>>(SERVER_PREFIX, "jobs/", page_query(&query))
                    .await?
                    .into_data()
            })
            .await
    }

    /// Creates a job.
    pub async fn create(&self, body: impl Into<Body<JobCreate>>) -> IconikResult<ApiResponse<Job>> {
        self.client.post(SERVER_PREFIX, "jobs/", &body.into()).await
    }

    /// Partially updates a job (status, progress, message).
    pub async fn update(
        &self,
        job_id: &str,
        body: impl Into<Body<JobUpdate>>,
    ) -> IconikResult<ApiResponse<Job>> {
        self.client
            .patch(SERVER_PREFIX, &format!("jobs/{}/", job_id), &body.into())
            .await
    }

    /// Deletes a job.
    pub async fn delete(&self, job_id: &str) -> IconikResult<ApiResponse<()>> {
        self.client
            .delete(SERVER_PREFIX, &format!("jobs/{}/", job_id))
            .await
    }

    /// Updates several steps of a job in one call.
    pub async fn bulk_update_steps(
        &self,
        job_id: &str,
        body: impl Into<Body<JobStepsUpdate>>,
    ) -> IconikResult<ApiResponse<Job>> {
        self.client
            .post(
                SERVER_PREFIX,
                &format!("jobs/{}/steps/bulk/", job_id),
                &body.into(),
            )
            .await
    }
}

/// Request to create a job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobCreate {
    /// Job title.
    pub title: String,
    /// Kind of work.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    /// Identifier of the object the job operates on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    /// Type of the object the job operates on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// Initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// Partial update of a job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobUpdate {
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<JobStatus>,
    /// Completion ratio, 0-100.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub progress: Field<u32>,
    /// Status message for operators.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
    /// Error message when failed.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub error_message: Field<String>,
}

/// One step in a bulk steps update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobStepUpdate {
    /// Step identifier.
    pub id: String,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// Status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request updating several job steps at once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobStepsUpdate {
    /// The steps to update.
    pub steps: Vec<JobStepUpdate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::DumpPolicy;
    use serde_json::json;

    #[test]
    fn test_job_update_patch_dump() {
        let update = JobUpdate {
            status: Field::Set(JobStatus::Finished),
            progress: Field::Set(100),
            ..Default::default()
        };
        let value = Body::Typed(update).serialize(DumpPolicy::patch()).unwrap();
        assert_eq!(value, json!({"status": "FINISHED", "progress": 100}));
    }
}
