//! GraphQL transport for the bulk gallery mutation.

use async_trait::async_trait;
use curator_model::bulk::BulkGalleryUpdateInput;
use curator_model::ids::GalleryID;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{CuratorError, Result};
use crate::services::GalleryUpdater;

pub const BULK_GALLERY_UPDATE: &str = "mutation BulkGalleryUpdate($input: BulkGalleryUpdateInput!) {
  bulkGalleryUpdate(input: $input) {
    id
  }
}";

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct BulkGalleryUpdateVariables<'a> {
    pub input: &'a BulkGalleryUpdateInput,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGalleryUpdateData {
    pub bulk_gallery_update: Option<Vec<UpdatedGallery>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatedGallery {
    pub id: GalleryID,
}

/// Catalog client speaking the server's GraphQL API.
#[derive(Clone)]
pub struct GraphQlClient {
    client: Client,
    url: Url,
    api_key: Option<String>,
}

impl std::fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("url", &self.url.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl GraphQlClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let url = config.graphql_url()?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        info!("[GraphQlClient] Creating client for {}", url);

        Ok(Self {
            client,
            url,
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request body sent for a bulk update.
    pub fn bulk_update_body(
        input: &BulkGalleryUpdateInput,
    ) -> Result<serde_json::Value> {
        let request = GraphQlRequest {
            query: BULK_GALLERY_UPDATE,
            variables: BulkGalleryUpdateVariables { input },
        };
        Ok(serde_json::to_value(request)?)
    }

    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        body: serde_json::Value,
    ) -> Result<T> {
        let mut request = self.client.post(self.url.clone()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("ApiKey", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CuratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        parse_response(&text)
    }
}

/// Decodes a GraphQL response body, turning reported errors into
/// [`CuratorError::GraphQl`].
pub fn parse_response<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
    let response: GraphQlResponse<T> = serde_json::from_str(raw)?;
    if !response.errors.is_empty() {
        let message = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CuratorError::GraphQl(message));
    }
    response
        .data
        .ok_or_else(|| CuratorError::GraphQl("empty response from server".into()))
}

#[async_trait]
impl GalleryUpdater for GraphQlClient {
    async fn bulk_gallery_update(
        &self,
        input: BulkGalleryUpdateInput,
    ) -> Result<Vec<GalleryID>> {
        debug!("[GraphQlClient] bulkGalleryUpdate for {} ids", input.ids.len());
        let body = Self::bulk_update_body(&input)?;
        let data: BulkGalleryUpdateData = self.execute(body).await?;
        Ok(data
            .bulk_gallery_update
            .unwrap_or_default()
            .into_iter()
            .map(|gallery| gallery.id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_joined() {
        let raw = r#"{"data": null, "errors": [{"message": "a"}, {"message": "b"}]}"#;
        let err = parse_response::<BulkGalleryUpdateData>(raw).unwrap_err();
        assert!(matches!(err, CuratorError::GraphQl(msg) if msg == "a; b"));
    }

    #[test]
    fn updated_ids_are_decoded() {
        let raw = r#"{"data": {"bulkGalleryUpdate": [{"id": "1"}, {"id": "2"}]}}"#;
        let data = parse_response::<BulkGalleryUpdateData>(raw).unwrap();
        let ids: Vec<String> = data
            .bulk_gallery_update
            .unwrap()
            .into_iter()
            .map(|g| g.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn missing_data_is_an_error() {
        let err = parse_response::<BulkGalleryUpdateData>(r#"{}"#).unwrap_err();
        assert!(matches!(err, CuratorError::GraphQl(_)));
    }
}
