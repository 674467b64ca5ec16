use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::business::{
    BusinessSettings, CreateBusinessSettingsRequest, CreateInterventionRequest,
    CreateMasterRequest, Intervention, Master, UpdateBusinessSettingsRequest,
    UpdateInterventionRequest, UpdateMasterRequest,
};
use crate::domain::ports::BusinessApi;
use crate::error::ApiError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpBusinessApi {
    client: Arc<ApiClient>,
}

impl HttpBusinessApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BusinessApi for HttpBusinessApi {
    async fn list_business_settings(&self) -> Result<Vec<BusinessSettings>, ApiError> {
        self.client.get("/business-settings").await
    }

    async fn my_business_settings(&self) -> Result<BusinessSettings, ApiError> {
        self.client.get("/business-settings/my-settings").await
    }

    async fn business_settings_by_slug(&self, slug: &str) -> Result<BusinessSettings, ApiError> {
        self.client
            .get(&format!("/business-settings/slug/{}", slug))
            .await
    }

    async fn create_business_settings(
        &self,
        request: &CreateBusinessSettingsRequest,
    ) -> Result<BusinessSettings, ApiError> {
        self.client.post("/business-settings", request).await
    }

    async fn update_business_settings(
        &self,
        id: &str,
        request: &UpdateBusinessSettingsRequest,
    ) -> Result<BusinessSettings, ApiError> {
        self.client
            .put(&format!("/business-settings/{}", id), request)
            .await
    }

    async fn delete_business_settings(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/business-settings/{}", id))
            .await
    }

    async fn list_interventions(&self) -> Result<Vec<Intervention>, ApiError> {
        self.client.get("/interventions").await
    }

    async fn intervention_by_id(&self, id: &str) -> Result<Intervention, ApiError> {
        self.client.get(&format!("/interventions/{}", id)).await
    }

    async fn create_intervention(
        &self,
        request: &CreateInterventionRequest,
    ) -> Result<Intervention, ApiError> {
        self.client.post("/interventions", request).await
    }

    async fn update_intervention(
        &self,
        id: &str,
        request: &UpdateInterventionRequest,
    ) -> Result<Intervention, ApiError> {
        self.client
            .put(&format!("/interventions/{}", id), request)
            .await
    }

    async fn delete_intervention(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/interventions/{}", id)).await
    }

    async fn list_masters(&self) -> Result<Vec<Master>, ApiError> {
        self.client.get("/masters").await
    }

    async fn master_by_id(&self, id: &str) -> Result<Master, ApiError> {
        self.client.get(&format!("/masters/{}", id)).await
    }

    async fn create_master(&self, request: &CreateMasterRequest) -> Result<Master, ApiError> {
        self.client.post("/masters", request).await
    }

    async fn update_master(
        &self,
        id: &str,
        request: &UpdateMasterRequest,
    ) -> Result<Master, ApiError> {
        self.client.put(&format!("/masters/{}", id), request).await
    }

    async fn delete_master(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/masters/{}", id)).await
    }
}
