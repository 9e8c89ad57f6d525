//! Palette session: what the user typed, what is on screen, and the one
//! round trip that changes it.

use crate::openai::{self, ChatCompletion};
use crate::palette::{self, ParseError};
use thiserror::Error;

pub const DEFAULT_COMPANY: &str = "Twitter";

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("chat completion failed: {0:#}")]
    Request(anyhow::Error),
    #[error("reply carried no message content")]
    MissingContent,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("reply contained no colors")]
    Empty,
}

pub type PaletteOutcome = Result<Vec<String>, PaletteError>;

/// Everything a fetch needs, captured when it was issued.
#[derive(Debug, Clone)]
pub struct PaletteRequest {
    pub id: u64,
    pub api_key: String,
    pub company_name: String,
}

impl PaletteRequest {
    pub fn prompt(&self) -> String {
        openai::brand_colors_prompt(&self.company_name)
    }

    /// Ask the model and turn its reply into a deduplicated palette.
    pub async fn execute(&self, client: &dyn ChatCompletion) -> PaletteOutcome {
        let content = client
            .complete(&self.api_key, &self.prompt())
            .await
            .map_err(PaletteError::Request)?
            .ok_or(PaletteError::MissingContent)?;

        let colors = palette::dedup(palette::parse_color_array(&content)?);
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(colors)
    }
}

#[derive(Debug, Clone)]
pub struct PaletteSession {
    api_key: String,
    company_name: String,
    loading: bool,
    colors: Vec<String>,
    latest_request: u64,
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY)
    }
}

impl PaletteSession {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            company_name: company_name.into(),
            loading: false,
            colors: palette::default_colors(),
            latest_request: 0,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn set_api_key(&mut self, text: impl Into<String>) {
        self.api_key = text.into();
    }

    pub fn set_company_name(&mut self, text: impl Into<String>) {
        self.company_name = text.into();
    }

    /// Mark a fetch as in flight. Any request issued earlier becomes stale.
    pub fn begin_request(&mut self) -> PaletteRequest {
        self.latest_request += 1;
        self.loading = true;
        tracing::info!(
            request_id = self.latest_request,
            company = %self.company_name,
            "requesting palette"
        );
        PaletteRequest {
            id: self.latest_request,
            api_key: self.api_key.clone(),
            company_name: self.company_name.clone(),
        }
    }

    /// Apply the outcome of request `id`.
    ///
    /// Returns false when a newer request has been issued since; the outcome
    /// is dropped and the session keeps waiting for the newer one.
    pub fn finish_request(&mut self, id: u64, outcome: &PaletteOutcome) -> bool {
        if id != self.latest_request {
            tracing::debug!(request_id = id, latest = self.latest_request, "dropping stale palette");
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(colors) => {
                tracing::info!(request_id = id, count = colors.len(), "palette updated");
                self.colors = colors.clone();
            }
            Err(e) => {
                tracing::warn!(request_id = id, error = %e, "unable to parse that company response");
            }
        }
        true
    }

    /// Issue one request and wait for it.
    pub async fn request_palette(&mut self, client: &dyn ChatCompletion) -> PaletteOutcome {
        let request = self.begin_request();
        let outcome = request.execute(client).await;
        self.finish_request(request.id, &outcome);
        outcome
    }
}
