//! Chat-completion access for brand color lookups
//!
//! This module provides:
//! - The `ChatCompletion` seam the session talks to
//! - An OpenAI-compatible HTTP client
//! - The prompt sent for a company name

pub mod client;
pub mod models;

pub use client::OpenAiClient;

use async_trait::async_trait;

/// Something that can answer a single user prompt.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Returns the first choice's text, or `None` when the reply carried none.
    async fn complete(&self, api_key: &str, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Build the brand color prompt. The name is interpolated as-is.
pub fn brand_colors_prompt(company_name: &str) -> String {
    format!(
        "What are the hex color codes for {company_name}'s logo in just a single-line \
         JavaScript array with no other explanations or variable name?"
    )
}
