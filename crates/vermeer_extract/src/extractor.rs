//! The transcript parsing grammar.

use crate::FilledTemplate;
use indexmap::IndexMap;
use regex::Regex;
use vermeer_error::{ExtractError, ExtractErrorKind, VermeerResult};

/// The literal that opens every template result section in a transcript.
const SECTION_DELIMITER: &str = "=== ";

/// Parses persisted diagnosis transcripts back into structured records.
///
/// # Examples
///
/// ```
/// use vermeer_extract::ResultExtractor;
///
/// let transcript = "\n=== welcome Results ===\n\
///     ### Completed Template\n\
///     Root cause: __cause(disk full)__\n";
///
/// let extractor = ResultExtractor::new().unwrap();
/// let records = extractor.extract(transcript);
/// assert_eq!(records["welcome"].filled_blanks["cause"], "disk full");
/// ```
#[derive(Debug, Clone)]
pub struct ResultExtractor {
    header: Regex,
    heading: Regex,
    blank: Regex,
    name_value: Regex,
}

impl ResultExtractor {
    /// Compile the extraction patterns.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] if any pattern fails to compile.
    pub fn new() -> VermeerResult<Self> {
        Ok(Self {
            // `<template-id> Results ===` at the head of a fragment.
            header: compile(r"^(\S+)\s+Results\s+===")?,
            // `## Completed Template` / `### Completed Template`, any case.
            heading: compile(r"(?i)#{2,3}\s*Completed Template\s*\n")?,
            // Spans delimited by two or more underscores, the content
            // optionally ending in a parenthetical value.
            blank: compile(r"_{2,}([^_]+(?:\([^)]*\))?)_{2,}")?,
            // `name(value)` with name restricted to letters and underscores.
            name_value: compile(r"^([a-zA-Z_]+)\s*\((.*)\)$")?,
        })
    }

    /// Parse a transcript into one record per recognizable template section.
    ///
    /// Sections without a parseable header or without a completed-template
    /// heading are discarded; a smaller-than-expected mapping is a valid
    /// result, not an error. When the same template id appears more than
    /// once, the later section overwrites the earlier record.
    #[tracing::instrument(skip(self, transcript), fields(transcript_len = transcript.len()))]
    pub fn extract(&self, transcript: &str) -> IndexMap<String, FilledTemplate> {
        let mut records = IndexMap::new();

        for section in transcript.split(SECTION_DELIMITER).skip(1) {
            let Some(header) = self.header.captures(section) else {
                tracing::debug!("Discarding fragment without a results header");
                continue;
            };
            let template_id = header[1].to_string();

            let Some(completed) = self.completed_subsection(section) else {
                tracing::debug!(
                    template_id = %template_id,
                    "Discarding fragment without a completed-template heading"
                );
                continue;
            };

            records.insert(template_id, self.parse_completed(completed));
        }

        tracing::info!(records = records.len(), "Extracted template records");
        records
    }

    /// Capture everything from the `Completed Template` heading up to the
    /// next heading or the end of the fragment.
    fn completed_subsection<'a>(&self, section: &'a str) -> Option<&'a str> {
        let heading = self.heading.find(section)?;
        let rest = &section[heading.end()..];
        let end = rest.find("###").unwrap_or(rest.len());
        Some(&rest[..end])
    }

    fn parse_completed(&self, completed: &str) -> FilledTemplate {
        let raw_filled_values: Vec<String> = self
            .blank
            .captures_iter(completed)
            .map(|cap| cap[1].to_string())
            .collect();

        let mut filled_blanks = IndexMap::new();
        let mut anonymous = 0usize;
        for raw in &raw_filled_values {
            let trimmed = raw.trim();
            if let Some(cap) = self.name_value.captures(trimmed) {
                filled_blanks.insert(cap[1].to_string(), cap[2].trim().to_string());
            } else {
                anonymous += 1;
                filled_blanks.insert(format!("blank_{anonymous}"), trimmed.to_string());
            }
        }

        let template_lines = completed
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('-') && (line.contains("__") || line.contains("{{")))
            .map(str::to_string)
            .collect();

        FilledTemplate {
            template_lines,
            filled_blanks,
            raw_filled_values,
        }
    }
}

fn compile(pattern: &str) -> VermeerResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| ExtractError::new(ExtractErrorKind::InvalidPattern(e.to_string())).into())
}
