use serde::Deserialize;

// API response wrappers
#[derive(Debug, Deserialize)]
pub struct PerspectiveListResponse {
    pub data: PerspectiveListData,
}

#[derive(Debug, Deserialize)]
pub struct PerspectiveListData {
    // A missing array decodes as an empty listing
    #[serde(default)]
    pub views: Vec<crate::models::Perspective>,
}
