mod config;
mod dictionary;
mod format;
mod merriam_webster;
mod tool;

pub use config::{ConfigError, DictionaryConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use dictionary::{DictionaryEntry, LookupResult, UNKNOWN_LABEL};
pub use format::{
    format_entry, format_response, EMPTY_WORD_PROMPT, MAX_ENTRIES, MAX_SUGGESTIONS,
};
pub use merriam_webster::MerriamWebster;
pub use tool::{Lookup, ToolDescription, ToolError, ToolRegistry};

pub const TOOL_NAME: &str = "merriam_webster_dictionary";
pub const TOOL_DESCRIPTION: &str = "Query the Merriam-Webster collegiate dictionary. \
Input: a single word. Output: a short text definition, spelling suggestions, \
or an informative message if nothing was found.";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary service: {0}")]
    Fetch(#[source] reqwest::Error),

    #[error("dictionary service answered with {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response from the dictionary service: {0}")]
    Deserialize(#[source] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Source of raw lookup results.
#[async_trait::async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<LookupResult, DictionaryError>;
}

pub struct Dictionary<F = MerriamWebster> {
    fetcher: F,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        Ok(Self {
            fetcher: MerriamWebster::new(config)?,
        })
    }
}

impl<F: Fetch> Dictionary<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Looks `word` up and formats the answer. Blank input never reaches
    /// the service; transport failures are returned as errors.
    pub async fn get_definition(&self, word: &str) -> Result<String, DictionaryError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(EMPTY_WORD_PROMPT.to_owned());
        }
        let result = self.fetcher.fetch(word).await?;
        tracing::debug!(word, empty = result.is_empty(), "received lookup result");
        Ok(format_response(word, &result))
    }
}

#[async_trait::async_trait]
impl<F: Fetch> Lookup for Dictionary<F> {
    async fn lookup(&self, input: &str) -> Result<String, DictionaryError> {
        self.get_definition(input).await
    }
}
