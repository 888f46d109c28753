// https://dictionaryapi.com/products/json - collegiate dictionary, answers with
// either entries or spelling suggestions

use reqwest::Url;

use crate::{
    config::{ConfigError, DictionaryConfig},
    dictionary::LookupResult,
    DictionaryError, Fetch,
};

pub struct MerriamWebster {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl MerriamWebster {
    pub fn new(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidBaseUrl(config.base_url.clone()))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DictionaryError::Fetch(e.without_url()))?;
        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait::async_trait]
impl Fetch for MerriamWebster {
    async fn fetch(&self, word: &str) -> Result<LookupResult, DictionaryError> {
        let url = word_url(&self.base_url, word)?;
        get_entries(&self.client, url, &self.api_key, word).await
    }
}

/// Appends `word` as a single, percent-encoded path segment.
fn word_url(base_url: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

// reqwest errors carry the request url, which includes the key
pub(crate) async fn get_entries(
    client: &reqwest::Client,
    url: Url,
    api_key: &str,
    word: &str,
) -> Result<LookupResult, DictionaryError> {
    tracing::debug!(%url, "querying collegiate dictionary");
    let res: reqwest::Response = client
        .get(url)
        .query(&[("key", api_key)])
        .send()
        .await
        .map_err(|e| DictionaryError::Fetch(e.without_url()))?;
    let status = res.status();
    if !status.is_success() {
        tracing::warn!(%status, word, "dictionary request failed");
        return Err(DictionaryError::Status(status));
    }
    res.json::<LookupResult>()
        .await
        .map_err(|e| DictionaryError::Deserialize(e.without_url()))
}
