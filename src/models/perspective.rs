use serde::Deserialize;

/// A saved cost view within Harness CCM, identified by an opaque id.
#[derive(Debug, Deserialize, Clone)]
pub struct Perspective {
    pub id: String,
    pub name: String,
}
