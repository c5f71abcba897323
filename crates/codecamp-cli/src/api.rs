//! CodeCamp API Client

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// API Client for CodeCamp
pub struct CampClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampResponse {
    pub name: String,
    pub moniker: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub length: i32,
    pub end_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub location_city_town: Option<String>,
    pub location_country: Option<String>,
    #[serde(default)]
    pub talks: Vec<TalkResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TalkResponse {
    pub title: String,
    pub level: i32,
    pub speaker: Option<SpeakerResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerResponse {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moniker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl CampClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn camps_url(&self) -> String {
        format!("{}/api/camps", self.base_url)
    }

    fn camp_url(&self, moniker: &str) -> String {
        format!("{}/{}", self.camps_url(), urlencoding::encode(moniker))
    }

    /// Send a request, logging the exchange at debug level
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build().context("Failed to build request")?;
        tracing::debug!("{} {}", request.method(), request.url());

        let resp = self
            .client
            .execute(request)
            .await
            .context("Failed to connect to CodeCamp API")?;
        tracing::debug!("-> {}", resp.status());

        Ok(resp)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.status().is_success())
    }

    /// List all camps
    pub async fn list_camps(&self, include_talks: bool) -> Result<Vec<CampResponse>> {
        let request = self
            .client
            .get(self.camps_url())
            .query(&[("includeTalks", include_talks)]);
        let resp = self.send(request).await?;

        parse(ensure_success(resp).await?).await
    }

    /// Get a specific camp
    pub async fn get_camp(&self, moniker: &str) -> Result<CampResponse> {
        let resp = self.send(self.client.get(self.camp_url(moniker))).await?;

        parse(ensure_success(resp).await?).await
    }

    /// Search camps by event date; no match is an empty list
    pub async fn search_camps(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<CampResponse>> {
        let request = self
            .client
            .get(format!("{}/search", self.camps_url()))
            .query(&[
                ("theDate", date.to_string()),
                ("includeTalks", include_talks.to_string()),
            ]);
        let resp = self.send(request).await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        parse(ensure_success(resp).await?).await
    }

    /// Create a camp, returning its location and the stored camp
    pub async fn create_camp(&self, request: &CampRequest) -> Result<(String, CampResponse)> {
        let resp = self
            .send(self.client.post(self.camps_url()).json(request))
            .await?;

        let resp = ensure_success(resp).await?;
        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok((location, parse(resp).await?))
    }

    /// Update the sent fields of a camp
    pub async fn update_camp(&self, moniker: &str, request: &CampRequest) -> Result<CampResponse> {
        let resp = self
            .send(self.client.put(self.camp_url(moniker)).json(request))
            .await?;

        parse(ensure_success(resp).await?).await
    }

    /// Delete a camp
    pub async fn delete_camp(&self, moniker: &str) -> Result<()> {
        let resp = self.send(self.client.delete(self.camp_url(moniker))).await?;

        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response> {
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("API error ({}): {}", status, body);
    }
    Ok(resp)
}

async fn parse<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json().await.context("Failed to parse response")
}
