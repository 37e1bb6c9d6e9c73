//! # HTTP Module / Módulo HTTP
//!
//! The two network interactions of the page: fetching the content document
//! at startup and POSTing the serialized RSVP form. The submission outcome
//! is decided in exactly one translation function so the collaborator
//! contract (an external form-receiving service) has a single touch point.
//!
//! Las dos interacciones de red de la página: la carga del documento de
//! contenido al arrancar y el envío POST del formulario RSVP serializado.

use anyhow::{Context, Result, bail};
use colored::*;
use reqwest::StatusCode;
use rust_i18n::t;
use serde_json::Value;

use crate::core::content::ContentStore;

/// Well-known location of the content document, relative to the site root.
pub const CONTENT_PATH: &str = "/data/content.json";

/// Client for the site's own origin.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base: String,
}

impl SiteClient {
    /// Creates a client for the given site origin (e.g.
    /// `https://example.com`). A trailing slash on the origin is tolerated.
    pub fn new(base: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches and parses the content document.
    pub async fn fetch_content(&self) -> Result<Value> {
        let url = format!("{}{}", self.base, CONTENT_PATH);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        if !response.status().is_success() {
            bail!("GET {url} returned {}", response.status());
        }

        let raw = response.text().await.with_context(|| format!("GET {url}"))?;
        serde_json::from_str(&raw).with_context(|| format!("malformed content document at {url}"))
    }

    /// Loads the content store, degrading to an empty store on any failure.
    /// The failure is logged and otherwise swallowed: the page renders with
    /// authored defaults instead of breaking.
    pub async fn load_content(&self) -> ContentStore {
        match self.fetch_content().await {
            Ok(doc) => ContentStore::from_value(doc),
            Err(e) => {
                eprintln!(
                    "{} {:#}",
                    t!("content_load_failed", path = format!("{}{}", self.base, CONTENT_PATH)).red(),
                    e
                );
                ContentStore::empty()
            }
        }
    }

    /// Submits the serialized RSVP pairs as
    /// `application/x-www-form-urlencoded` to the site's root path.
    pub async fn submit_rsvp(&self, pairs: &[(String, String)]) -> Result<()> {
        let url = format!("{}/", self.base);
        let response = self
            .http
            .post(&url)
            .form(pairs)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;

        interpret_submit_response(response.status())
    }
}

/// Translates the receiving service's response into a submission outcome.
///
/// Any HTTP success status counts as an accepted submission; the service
/// answers with an HTML body rather than structured data, so the body is
/// deliberately not parsed. This is the only place the collaborator's
/// response shape is interpreted.
pub fn interpret_submit_response(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        bail!(
            "Server error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
    }
}
