//! Advisory text service
//!
//! Requirement refinement and strategy suggestions backed by a hosted
//! generative-text model. Failures never reach the caller: refinement falls
//! back to the original text and strategy falls back to a fixed string.
//!
//! Authentication via environment variables:
//! - GEMINI_API_KEY (priority)
//! - API_KEY (fallback)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AdvisoryConfig;

pub const NO_STRATEGY: &str = "No strategy available.";

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory service has no API key configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Anything that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError>;
}

fn refine_prompt(raw: &str) -> String {
    format!(
        "Refine the following data collection requirement into a professional, structured format suitable for data scrapers. Include sections for: Objective, Target Sources, Format Requirements, and Quality Standards. \n\nRaw Text: {}",
        raw
    )
}

fn strategy_prompt(title: &str, description: &str) -> String {
    format!(
        "Suggest 3 effective scraping strategies or tools for this bounty: \"{}\". \nDescription: {}. Keep it concise.",
        title, description
    )
}

// ============================================================================
// Gemini client
// ============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &AdvisoryConfig) -> Self {
        let api_key = config.api_key();
        if api_key.is_some() {
            info!("Advisory client initialized for model {}", config.model);
        } else {
            warn!("Advisory client initialized WITHOUT API key - suggestions will use fallbacks");
        }
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
        let api_key = self.api_key.as_ref().ok_or(AdvisoryError::NotConfigured)?;

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!("Calling advisory model {}", self.model);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Status { status, body });
        }

        let data: GenerateResponse = response.json().await?;
        data.text().ok_or(AdvisoryError::EmptyResponse)
    }
}

// ============================================================================
// Service with fallbacks
// ============================================================================

pub struct AdvisoryService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl AdvisoryService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn from_config(config: &AdvisoryConfig) -> Self {
        Self::new(Arc::new(GeminiClient::new(config)), config.timeout())
    }

    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
        let text = tokio::time::timeout(self.timeout, self.generator.generate(prompt))
            .await
            .map_err(|_| AdvisoryError::Timeout(self.timeout))??;
        if text.trim().is_empty() {
            return Err(AdvisoryError::EmptyResponse);
        }
        Ok(text)
    }

    /// Restructure a requirement; returns `raw` unchanged on any failure
    pub async fn refine_requirement(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return raw.to_string();
        }
        match self.generate(&refine_prompt(raw)).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Requirement refinement failed, keeping original: {}", e);
                raw.to_string()
            }
        }
    }

    /// Up to three strategy suggestions for a bounty
    pub async fn suggest_strategy(&self, title: &str, description: &str) -> String {
        match self.generate(&strategy_prompt(title, description)).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Strategy suggestion failed: {}", e);
                NO_STRATEGY.to_string()
            }
        }
    }
}

// ============================================================================
// In-flight guard
// ============================================================================

/// Busy flag for one control: a second request is refused while one runs
#[derive(Debug, Default)]
pub struct InFlight {
    busy: AtomicBool,
}

pub struct InFlightGuard<'a> {
    flag: &'a InFlight,
}

impl InFlight {
    pub fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}
