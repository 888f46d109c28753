//! Turns a lookup result into the text handed back to the caller.

use crate::dictionary::{DictionaryEntry, LookupResult};

pub const MAX_SUGGESTIONS: usize = 5;
pub const MAX_ENTRIES: usize = 3;

pub const EMPTY_WORD_PROMPT: &str = "Please provide a word to look up.";

/// Formats a lookup result for `word`. `word` is expected to be trimmed
/// and non-empty already.
pub fn format_response(word: &str, result: &LookupResult) -> String {
    if result.is_empty() {
        return format!("No results found for '{word}'.");
    }
    match result {
        LookupResult::Suggestions(suggestions) => format_suggestions(word, suggestions),
        LookupResult::Entries(entries) => format_entries(word, entries),
    }
}

fn format_suggestions(word: &str, suggestions: &[String]) -> String {
    let suggestions = &suggestions[..suggestions.len().min(MAX_SUGGESTIONS)];
    if let [only] = suggestions {
        return format!("Did you mean '{only}'?");
    }
    let mut output = format!(
        "No exact match for '{word}'. You can try one of the following alternatives:"
    );
    for (index, suggestion) in suggestions.iter().enumerate() {
        output.push_str(&format!("\n{}. {suggestion}", index + 1));
    }
    output
}

fn format_entries(word: &str, entries: &[DictionaryEntry]) -> String {
    let lines = entries
        .iter()
        .take(MAX_ENTRIES)
        .flat_map(format_entry)
        .collect::<Vec<String>>();
    match &lines[..] {
        [] => format!("No definitions found for '{word}'."),
        [line] => format!("Definition of '{word}':\n{line}"),
        lines => {
            let mut output = format!("Definitions of '{word}':\n\n");
            for (index, line) in lines.iter().enumerate() {
                output.push_str(&format!("{}. {line}\n", index + 1));
            }
            output
        }
    }
}

/// One line per short definition, or a single bare line when the entry
/// has no short definition list.
pub fn format_entry(entry: &DictionaryEntry) -> Vec<String> {
    let prefix = format!("{}, {}", entry.headword, entry.functional_label);
    match &entry.short_definitions {
        Some(definitions) => definitions
            .iter()
            .map(|definition| format!("{prefix}, {definition}"))
            .collect(),
        None => vec![prefix],
    }
}
