use serde::{Deserialize, Serialize};

use super::block::ContentBlock;

/// One course in the catalog, as authored in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// One lesson: an ordered, flat sequence of content blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}
