use crate::errors::AppError;
use crate::models::EventLeadRow;
use std::time::Duration;

/// Client for the Supabase REST (PostgREST) endpoint backing lead storage.
///
/// Holds the service-role credential, so it must only ever run server-side.
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

impl SupabaseClient {
    /// Creates a new `SupabaseClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the Supabase project.
    /// * `service_role_key` - The privileged service-role key.
    pub fn new(base_url: String, service_role_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create Supabase client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            service_role_key,
        })
    }

    /// Inserts a single row into the `event_leads` table.
    ///
    /// PostgREST accepts a JSON array of rows; a one-element array is sent to
    /// match the table insert contract. `Prefer: return=minimal` skips the
    /// representation echo since the caller never reads it back.
    pub async fn insert_event_lead(&self, row: &EventLeadRow) -> Result<(), AppError> {
        let url = format!("{}/rest/v1/event_leads", self.base_url);
        tracing::debug!("Inserting event lead: {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.service_role_key),
            )
            .header("Prefer", "return=minimal")
            .json(std::slice::from_ref(row))
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Supabase request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Supabase returned {}: {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
