// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blocking DeepL client with pass-through fallback.
//!
//! One form-encoded POST per untranslated line. The client never
//! surfaces a request error to the scanner: any failure (connect,
//! timeout, non-2xx status, undecodable body) is logged to stderr and
//! the original text is returned unchanged, so a dead API degrades the
//! run to a no-op instead of aborting it.

use crate::types::{Formality, Translator};
use anyhow::{anyhow, bail, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// DeepL Pro translate endpoint.
pub const DEEPL_API_URL: &str = "https://api.deepl.com/v2/translate";

/// Environment variable holding the DeepL auth key.
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslatedSegment>,
}

#[derive(Debug, Deserialize)]
struct TranslatedSegment {
    text: String,
}

/// Client for the DeepL `/v2/translate` endpoint.
///
/// Holds the target language and formality for the whole run; the
/// scanner only ever hands it the text.
pub struct DeepLClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    target_lang: String,
    formality: Formality,
}

impl DeepLClient {
    /// Builds a client against the production endpoint, reading the
    /// auth key from [`API_KEY_ENV`].
    ///
    /// Fails before any network activity when the key is missing or
    /// blank, so a misconfigured run aborts up front instead of
    /// pass-through-ing every line.
    pub fn from_env(target_lang: &str, formality: Formality) -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| anyhow!("{} not set (put it in .env or the environment)", API_KEY_ENV))?;
        if api_key.trim().is_empty() {
            bail!("{} is set but empty", API_KEY_ENV);
        }
        Self::new(&api_key, DEEPL_API_URL, target_lang, formality)
    }

    /// Builds a client against an explicit endpoint. Tests point this
    /// at an unroutable address to exercise the fallback path.
    pub fn new(
        api_key: &str,
        endpoint: &str,
        target_lang: &str,
        formality: Formality,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            target_lang: target_lang.to_string(),
            formality,
        })
    }

    /// Target language code this client translates into.
    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    fn request(&self, text: &str) -> Result<String> {
        let mut params = vec![
            ("auth_key", self.api_key.as_str()),
            ("text", text),
            ("target_lang", self.target_lang.as_str()),
        ];
        if let Some(formality) = self.formality.as_param() {
            params.push(("formality", formality));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()?
            .error_for_status()?;

        let body: TranslateResponse = response.json()?;
        // DeepL may split the text and return several segments; the
        // first one carries the translation of what we sent.
        body.translations
            .into_iter()
            .next()
            .map(|segment| segment.text)
            .ok_or_else(|| anyhow!("empty translations array in DeepL response"))
    }
}

impl Translator for DeepLClient {
    fn translate(&self, text: &str) -> String {
        match self.request(text) {
            Ok(translated) => translated,
            Err(err) => {
                eprintln!("DeepL request failed ({}); keeping original text", err);
                text.to_string()
            }
        }
    }
}
