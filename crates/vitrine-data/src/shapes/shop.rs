//! Shop metadata.

use serde::{Deserialize, Serialize};

/// Shop name and description, used for the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
