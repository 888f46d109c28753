use serde::Deserialize;

/// Label used when an entry carries no functional label.
pub const UNKNOWN_LABEL: &str = "unknown";

const SYLLABLE_BREAK: char = '*';
const ID_DELIMITER: char = ':';

/// Parsed body of a collegiate lookup.
///
/// The service answers with either a list of spelling suggestions or a
/// list of entries. An empty list deserializes as `Suggestions(vec![])`
/// and is treated as "no results" by the formatter, whichever variant it
/// lands in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LookupResult {
    Suggestions(Vec<String>),
    Entries(Vec<DictionaryEntry>),
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        match self {
            LookupResult::Suggestions(suggestions) => suggestions.is_empty(),
            LookupResult::Entries(entries) => entries.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct DictionaryEntry {
    pub headword: String,
    pub functional_label: String,
    /// `None` when the record had no `shortdef` field at all.
    pub short_definitions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    meta: Option<RawMeta>,
    hwi: Option<RawHeadwordInfo>,
    fl: Option<String>,
    shortdef: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHeadwordInfo {
    hw: Option<String>,
}

impl From<RawEntry> for DictionaryEntry {
    fn from(raw: RawEntry) -> Self {
        let headword = match (raw.hwi.and_then(|hwi| hwi.hw), raw.meta.and_then(|meta| meta.id)) {
            (Some(hw), _) => hw.replace(SYLLABLE_BREAK, "-"),
            (None, Some(id)) => headword_from_id(&id).to_owned(),
            // neither naming field is present; the service never sends this
            (None, None) => String::new(),
        };
        Self {
            headword,
            functional_label: raw.fl.unwrap_or_else(|| UNKNOWN_LABEL.to_owned()),
            short_definitions: raw.shortdef,
        }
    }
}

/// `"foobar:1"` -> `"foobar"`
fn headword_from_id(id: &str) -> &str {
    id.split(ID_DELIMITER).next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> LookupResult {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn suggestions_are_recognized() {
        let result = parse(r#"["cat", "bat", "rat"]"#);
        assert_eq!(
            result,
            LookupResult::Suggestions(vec!["cat".into(), "bat".into(), "rat".into()])
        );
    }

    #[test]
    fn empty_body_is_empty() {
        assert!(parse("[]").is_empty());
    }

    #[test]
    fn headword_replaces_syllable_breaks() {
        let result = parse(r#"[{"meta":{"id":"career:1"},"hwi":{"hw":"ca*reer"},"fl":"noun","shortdef":["a field for pursuit"]}]"#);
        let LookupResult::Entries(entries) = result else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].headword, "ca-reer");
        assert_eq!(entries[0].functional_label, "noun");
    }

    #[test]
    fn headword_falls_back_to_id() {
        let result = parse(r#"[{"meta":{"id":"foobar:1"},"fl":"noun","shortdef":["a placeholder"]}]"#);
        let LookupResult::Entries(entries) = result else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].headword, "foobar");
    }

    #[test]
    fn id_without_delimiter_is_used_whole() {
        assert_eq!(headword_from_id("ethereal"), "ethereal");
    }

    #[test]
    fn missing_label_and_shortdef() {
        let result = parse(r#"[{"meta":{"id":"cat:2"},"hwi":{"hw":"cat"}}]"#);
        let LookupResult::Entries(entries) = result else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].functional_label, UNKNOWN_LABEL);
        assert_eq!(entries[0].short_definitions, None);
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let result = parse(
            r#"[{"meta":{"id":"run:1","uuid":"x","stems":["run"]},"hwi":{"hw":"run","prs":[]},"fl":"verb","def":[],"shortdef":["move swiftly"]}]"#,
        );
        assert!(matches!(result, LookupResult::Entries(ref entries) if entries.len() == 1));
    }
}
