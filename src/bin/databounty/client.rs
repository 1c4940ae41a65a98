//! DataBounty API Client
//!
//! Thin JSON client for the DataBounty server endpoints.

use anyhow::{anyhow, Result};
use data_bounty::types::{
    Bounty, BountyDraft, DashboardSummary, PayoutKind, PayoutReceipt, Role, Submission,
    SubmissionFile, SubmissionReceipt, User,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct AdvisoryText {
    text: String,
}

/// Public server settings from `GET /config`
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub min_reward: f64,
}

/// DataBounty server client
pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(server_url: &str) -> Self {
        // Build HTTP client with timeout, falling back to default client if builder fails
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        let body: serde_json::Value = resp.json().await.unwrap_or_default();
        let message = body["error"].as_str().unwrap_or("Unknown error");
        Err(anyhow!("{} ({})", message, status))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: serde_json::Value) -> Result<T> {
        self.send(self.client.post(self.url(path)).json(&body)).await
    }

    pub async fn config(&self) -> Result<ServerConfig> {
        self.get("config").await
    }

    pub async fn login(&self, role: Role) -> Result<User> {
        self.post("session/login", json!({ "role": role })).await
    }

    pub async fn logout(&self) -> Result<bool> {
        let body: serde_json::Value = self.post("session/logout", json!({})).await?;
        Ok(body["logged_out"].as_bool().unwrap_or(false))
    }

    pub async fn whoami(&self) -> Result<User> {
        self.get("session").await
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        self.get("dashboard").await
    }

    pub async fn list_bounties(&self, category: Option<&str>) -> Result<Vec<Bounty>> {
        let mut request = self.client.get(self.url("bounties"));
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }
        self.send(request).await
    }

    pub async fn get_bounty(&self, id: &str) -> Result<Bounty> {
        self.get(&format!("bounties/{}", id)).await
    }

    pub async fn bounty_submissions(&self, id: &str) -> Result<Vec<Submission>> {
        self.get(&format!("bounties/{}/submissions", id)).await
    }

    pub async fn create_bounty(&self, draft: &BountyDraft) -> Result<Bounty> {
        self.post("bounties", serde_json::to_value(draft)?).await
    }

    pub async fn complete_bounty(&self, id: &str) -> Result<Bounty> {
        self.post(&format!("bounties/{}/complete", id), json!({}))
            .await
    }

    pub async fn cancel_bounty(&self, id: &str) -> Result<Bounty> {
        self.post(&format!("bounties/{}/cancel", id), json!({})).await
    }

    pub async fn submit_files(
        &self,
        bounty_id: &str,
        files: &[SubmissionFile],
    ) -> Result<SubmissionReceipt> {
        self.post(
            &format!("bounties/{}/submissions", bounty_id),
            json!({ "files": files }),
        )
        .await
    }

    pub async fn payout(
        &self,
        submission_id: &str,
        kind: PayoutKind,
        amount: Option<f64>,
    ) -> Result<PayoutReceipt> {
        self.post(
            &format!("submissions/{}/payout", submission_id),
            json!({ "kind": kind, "amount": amount }),
        )
        .await
    }

    pub async fn reject(&self, submission_id: &str, comment: Option<&str>) -> Result<Submission> {
        self.post(
            &format!("submissions/{}/reject", submission_id),
            json!({ "comment": comment }),
        )
        .await
    }

    pub async fn refine(&self, text: &str) -> Result<String> {
        let body: AdvisoryText = self
            .post("advisory/refine", json!({ "text": text }))
            .await?;
        Ok(body.text)
    }

    pub async fn strategy(&self, title: &str, description: &str) -> Result<String> {
        let body: AdvisoryText = self
            .post(
                "advisory/strategy",
                json!({ "title": title, "description": description }),
            )
            .await?;
        Ok(body.text)
    }
}
