//! Named capabilities an agent or a command loop can dispatch to.

use std::{collections::BTreeMap, sync::Arc};

use crate::DictionaryError;

/// A single text-in, text-out capability.
#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, input: &str) -> Result<String, DictionaryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("no tool named '{0}'")]
    UnknownTool(String),

    #[error(transparent)]
    Lookup(#[from] DictionaryError),
}

struct RegisteredTool {
    description: String,
    tool: Arc<dyn Lookup>,
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `tool` under `name`, replacing any tool already there.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        tool: Arc<dyn Lookup>,
    ) {
        self.tools.insert(
            name.into(),
            RegisteredTool {
                description: description.into(),
                tool,
            },
        );
    }

    /// Tools ordered by name.
    pub fn describe(&self) -> Vec<ToolDescription> {
        self.tools
            .iter()
            .map(|(name, registered)| ToolDescription {
                name: name.clone(),
                description: registered.description.clone(),
            })
            .collect()
    }

    pub async fn call(&self, name: &str, input: &str) -> Result<String, ToolError> {
        let registered = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_owned()))?;
        tracing::debug!(tool = name, input, "calling tool");
        Ok(registered.tool.lookup(input).await?)
    }
}
