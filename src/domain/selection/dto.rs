use serde::{Deserialize, Serialize};

/// Query of GET /simulateAPICall; every parameter is optional on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateApiCallQuery {
    pub selected_voice: Option<String>,
    pub selected_language: Option<String>,
    pub selected_name: Option<String>,
    pub selected_topic: Option<String>,
}

/// Response for GET /simulateAPICall: the greeting link first, then 0-5 general links
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFilesResponse {
    pub audio_files: Vec<String>,
}
