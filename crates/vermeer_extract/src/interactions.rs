//! Lenient recovery of interaction edges from dispatch completions.

use serde::Deserialize;
use vermeer_interface::InteractionEdge;

/// Extract a JSON payload from a completion that may wrap it in markdown or
/// surrounding prose.
///
/// Tries markdown code blocks first, then the first balanced object or
/// array. Returns `None` when no JSON-shaped span exists; callers treat that
/// as an absent record, not an error.
///
/// # Examples
///
/// ```
/// use vermeer_extract::extract_json;
///
/// let response = "Here you go:\n```json\n{\"Hive\": \"Hadoop\"}\n```\n";
/// assert_eq!(extract_json(response).unwrap(), "{\"Hive\": \"Hadoop\"}");
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    if let Some(json) = extract_from_code_block(response, "json") {
        return Some(json);
    }

    // Prefer whichever balanced structure opens first.
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');
    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => extract_balanced(response, '[', ']')
            .or_else(|| extract_balanced(response, '{', '}')),
        (Some(_), None) => extract_balanced(response, '[', ']'),
        _ => extract_balanced(response, '{', '}')
            .or_else(|| extract_balanced(response, '[', ']')),
    }
}

/// Recover structured interaction edges from a pattern-dispatch completion.
///
/// The dispatch prompt asks for a machine-readable `edges` array alongside
/// the narrative classification. This parser accepts either that wrapped
/// form or a bare array of edge objects, and yields an empty list for
/// anything else; a dispatch completion with no parseable edges is a valid,
/// smaller result.
pub fn parse_interaction_edges(response: &str) -> Vec<InteractionEdge> {
    #[derive(Deserialize)]
    struct Wrapped {
        edges: Vec<InteractionEdge>,
    }

    let Some(json) = extract_json(response) else {
        tracing::debug!("No JSON payload in dispatch completion");
        return Vec::new();
    };

    if let Ok(wrapped) = serde_json::from_str::<Wrapped>(&json) {
        return wrapped.edges;
    }
    if let Ok(edges) = serde_json::from_str::<Vec<InteractionEdge>>(&json) {
        return edges;
    }

    tracing::debug!("Dispatch completion JSON carries no edge records");
    Vec::new()
}

/// Extract content from a markdown code block fence.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{language}");

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence, likely a truncated response.
        return Some(response[content_start..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters, honoring string literals.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use vermeer_interface::PatternCategory;

    #[test]
    fn extracts_from_code_block() {
        let response = "Sure:\n```json\n{\"a\": 1}\n```\nDone.";
        assert_eq!(extract_json(response).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn extracts_balanced_braces_with_nesting() {
        let response = "prefix {\"outer\": {\"inner\": \"}\"}} suffix";
        assert_eq!(
            extract_json(response).unwrap(),
            "{\"outer\": {\"inner\": \"}\"}}"
        );
    }

    #[test]
    fn prefers_the_structure_that_opens_first() {
        let response = "[1, 2] and then {\"a\": 1}";
        assert_eq!(extract_json(response).unwrap(), "[1, 2]");
    }

    #[test]
    fn plain_text_yields_none() {
        assert!(extract_json("no structured payload here").is_none());
    }

    #[test]
    fn parses_a_wrapped_edges_array() {
        let response = r#"Classification complete.
```json
{
  "edges": [
    {
      "component_a": "Hive",
      "component_b": "Hadoop",
      "resource": "hdfs://tmp/scratch",
      "category": "shared_object",
      "evidence_regexes": ["FileNotFoundException.*scratch"],
      "reasoning": "Both touch the scratch dir.",
      "assumptions": "Clock skew is negligible."
    }
  ]
}
```"#;
        let edges = parse_interaction_edges(response);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].component_a(), "Hive");
        assert_eq!(*edges[0].category(), PatternCategory::SharedObject);
    }

    #[test]
    fn parses_a_bare_edge_array_with_defaults() {
        let response = r#"[
            {"component_a": "Spark", "component_b": "Flink",
             "resource": "socket", "category": "abnormal_usage"}
        ]"#;
        let edges = parse_interaction_edges(response);
        assert_eq!(edges.len(), 1);
        assert!(edges[0].evidence_regexes().is_empty());
        assert_eq!(*edges[0].category(), PatternCategory::AbnormalUsage);
    }

    #[test]
    fn unparseable_payload_yields_no_edges() {
        assert!(parse_interaction_edges("{ \"Hive\": \"Hadoop\" }").is_empty());
        assert!(parse_interaction_edges("no json at all").is_empty());
    }
}
