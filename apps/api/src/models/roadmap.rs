//! Learning roadmap model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub resources: Vec<ResourceLink>,
    pub completed: bool,
}
