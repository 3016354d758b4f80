//! Aura flavor text: names and one-line descriptions.
//!
//! The game asks a [`FlavorSource`] for text whenever an aura is rolled.
//! Two sources exist: [`TemplateFlavor`] builds names locally, and
//! [`RemoteFlavor`] asks a Gemini-style `generateContent` endpoint. The
//! remote source never surfaces a failure to the caller; any problem is
//! logged and replaced by a fixed template so the roll is never lost.

use super::types::Rarity;
use crate::core::config::GameConfig;
use crate::core::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const OFFLINE_DESCRIPTION: &str = "A mysterious aura emanating strange energy.";
const FAILURE_DESCRIPTION: &str = "You feel a faint power from this aura.";

/// Name and description for a new aura.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraFlavor {
    pub name: String,
    pub description: String,
}

/// Produces flavor text for a freshly rolled aura. Must always return.
pub trait FlavorSource {
    fn describe(&self, rarity: Rarity, zone_name: &str) -> AuraFlavor;
}

/// Template used when no credential is configured,
/// e.g. "Rare Aura of Dusty".
pub fn offline_flavor(rarity: Rarity, zone_name: &str) -> AuraFlavor {
    let zone_word = zone_name.split(' ').next().unwrap_or(zone_name);
    AuraFlavor {
        name: format!("{} Aura of {}", rarity.name(), zone_word),
        description: OFFLINE_DESCRIPTION.to_string(),
    }
}

/// Template used when the remote service fails, e.g. "Rare Essence".
pub fn failure_flavor(rarity: Rarity) -> AuraFlavor {
    AuraFlavor {
        name: format!("{} Essence", rarity.name()),
        description: FAILURE_DESCRIPTION.to_string(),
    }
}

/// Deterministic local names.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFlavor;

impl FlavorSource for TemplateFlavor {
    fn describe(&self, rarity: Rarity, zone_name: &str) -> AuraFlavor {
        offline_flavor(rarity, zone_name)
    }
}

// ── Remote ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Flavor text from a Gemini-compatible HTTP endpoint.
pub struct RemoteFlavor {
    agent: ureq::Agent,
    api_key: String,
    endpoint: String,
    model: String,
}

impl RemoteFlavor {
    pub fn new(api_key: String, endpoint: String, model: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn prompt(rarity: Rarity, zone_name: &str) -> String {
        format!(
            "Generate a cool, fantasy RPG Aura name and a short one-sentence description. \
             Rarity: {}. Found in Zone: {}. \
             The name should be abstract like \"Void Walker\" or \"Solar Flare\".",
            rarity.name(),
            zone_name
        )
    }

    /// Performs one request. Errors are [`GameError::GenerationUnavailable`].
    pub fn request(&self, rarity: Rarity, zone_name: &str) -> GameResult<AuraFlavor> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": Self::prompt(rarity, zone_name) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            }
        });

        let response = self
            .agent
            .post(&self.url())
            .set("x-goog-api-key", &self.api_key)
            .send_json(body)
            .map_err(|e| GameError::GenerationUnavailable(e.to_string()))?;

        let payload: serde_json::Value = response
            .into_json()
            .map_err(|e| GameError::GenerationUnavailable(e.to_string()))?;

        parse_generate_response(payload)
    }
}

impl FlavorSource for RemoteFlavor {
    fn describe(&self, rarity: Rarity, zone_name: &str) -> AuraFlavor {
        match self.request(rarity, zone_name) {
            Ok(flavor) => flavor,
            Err(err) => {
                tracing::warn!(error = %err, rarity = rarity.name(), "aura flavor request failed");
                failure_flavor(rarity)
            }
        }
    }
}

/// Extracts `{name, description}` from a `generateContent` response body.
pub fn parse_generate_response(payload: serde_json::Value) -> GameResult<AuraFlavor> {
    let response: GenerateContentResponse = serde_json::from_value(payload)
        .map_err(|e| GameError::GenerationUnavailable(format!("unexpected response: {e}")))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GameError::GenerationUnavailable("No text returned".into()));
    }

    let flavor: AuraFlavor = serde_json::from_str(text.trim())
        .map_err(|e| GameError::GenerationUnavailable(format!("malformed flavor json: {e}")))?;

    let name = flavor.name.trim();
    if name.is_empty() {
        return Err(GameError::GenerationUnavailable("blank aura name".into()));
    }

    Ok(AuraFlavor {
        name: name.to_string(),
        description: flavor.description.trim().to_string(),
    })
}

/// Picks the flavor source for a configuration: remote when a credential
/// is present, local templates otherwise.
pub fn flavor_source_for(config: &GameConfig) -> Box<dyn FlavorSource> {
    match &config.flavor_api_key {
        Some(key) => {
            tracing::info!(model = %config.flavor_model, "using remote aura flavor text");
            Box::new(RemoteFlavor::new(
                key.clone(),
                config.flavor_endpoint.clone(),
                config.flavor_model.clone(),
                config.flavor_timeout,
            ))
        }
        None => {
            tracing::info!("no flavor credential configured, using template aura names");
            Box::new(TemplateFlavor)
        }
    }
}
