use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A user-facing message with a single `:token` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
#[display(fmt = "{_0}")]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replaces the first occurrence of `token` with `value`. A template
    /// without the token is returned as-is.
    pub fn render(&self, token: &str, value: &str) -> String {
        self.0.replacen(token, value, 1)
    }
}

impl From<&str> for MessageTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}
