use serde::{Deserialize, Deserializer, Serialize};

/// Credentials blob for the DLP API, typically provided inline as JSON
/// through `GOOGLE_APPLICATION_CREDENTIALS`.
#[derive(Debug, Clone, Deserialize)]
pub struct DlpCredentials {
    pub project_id: String,
    pub api_key: String,
}

/// A single info type to search for, e.g. `EMAIL_ADDRESS`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoType {
    pub name: String,
}

/// Finding limits. `max_findings_per_request: 0` means server maximum.
#[derive(Debug, Clone, Serialize)]
pub struct InspectLimits {
    #[serde(rename = "maxFindingsPerRequest")]
    pub max_findings_per_request: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectConfig {
    #[serde(rename = "infoTypes")]
    pub info_types: Vec<InfoType>,
    #[serde(rename = "minLikelihood")]
    pub min_likelihood: String,
    pub limits: InspectLimits,
    #[serde(rename = "includeQuote")]
    pub include_quote: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentItem {
    pub value: String,
}

/// Body for `content:inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct InspectRequest {
    pub parent: String,
    #[serde(rename = "inspectConfig")]
    pub inspect_config: InspectConfig,
    pub item: ContentItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectResponse {
    #[serde(default)]
    pub result: Option<InspectResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectResult {
    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// One detected entity occurrence.
#[derive(Debug, Clone, Deserialize)]
pub struct Finding {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default, rename = "infoType")]
    pub info_type: Option<FindingInfoType>,
    #[serde(default)]
    pub likelihood: Option<String>,
    #[serde(default)]
    pub location: Option<FindingLocation>,
}

impl Finding {
    /// Codepoint `[start, end)` range of the finding, when the API reported one.
    pub fn codepoint_range(&self) -> Option<(usize, usize)> {
        let range = self.location.as_ref()?.codepoint_range.as_ref()?;
        Some((range.start, range.end))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindingInfoType {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindingLocation {
    #[serde(default, rename = "codepointRange")]
    pub codepoint_range: Option<CodepointRange>,
}

/// Codepoint offsets of a finding. The API encodes these as protobuf int64,
/// which arrives as a JSON string; plain numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
pub struct CodepointRange {
    #[serde(default, deserialize_with = "int64_from_json")]
    pub start: usize,
    #[serde(default, deserialize_with = "int64_from_json")]
    pub end: usize,
}

fn int64_from_json<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n as usize),
        NumberOrString::String(s) => s.parse::<usize>().map_err(serde::de::Error::custom),
    }
}
