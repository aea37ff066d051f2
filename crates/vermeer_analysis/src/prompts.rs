//! Prompt texts for every protocol step.
//!
//! The wording here is load-bearing: the block prompts implement the
//! wait-for-final-part handshake, and the template-fill prompt pins the
//! output wire format the extractor parses.

use vermeer_core::LogBlock;

/// What the last block announces as the task that follows log delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextTask {
    /// The analysis flow: interaction graph construction comes next
    InteractionGraph,
    /// The diagnosis flow: template filling comes next
    Templates,
}

impl NextTask {
    fn announcement(self) -> &'static str {
        match self {
            NextTask::InteractionGraph => {
                "I have sent the final log block. Next I will ask you to construct the \
                 cross-component interaction graph."
            }
            NextTask::Templates => {
                "I have sent the final log block. I'll give you some templates next."
            }
        }
    }
}

/// System message seeding an interaction-analysis session.
pub fn analysis_system_prompt() -> String {
    "You are a log analysis expert that helps detect cross-component issues. \
     Cross-component refers to different frameworks, which may include Hive, Spark, \
     Flink, Hadoop etc. Your task is to:\n\
     1. Analyze log files to identify cross-component interactions via resource utilization.\n\
     2. Maintain context from previous messages to build a comprehensive understanding."
        .to_string()
}

/// System message seeding a template-diagnosis session.
pub fn diagnosis_system_prompt() -> String {
    "You are a log analysis expert that helps detect cross-component issues. \
     Cross-component refers to different frameworks, such as Hive, Spark, Flink, Hadoop. \
     Your task is to:\n\
     1. Analyze log files to identify cross-component interactions.\n\
     2. For each provided template, fill in the blanks ([]) based on context from the logs.\n\
     3. Write a general template that can be applied to similar cases if the current \
     templates can't work.\n\
     4. Always provide clear reasoning for your conclusions."
        .to_string()
}

/// The user turn delivering one log block, with position-dependent wording.
///
/// The first block announces multi-part delivery and instructs the engine to
/// wait for the final-part signal; interior blocks repeat the wait
/// instruction; the last block signals completion and announces the next
/// task.
pub fn block_prompt(block: &LogBlock, next_task: NextTask) -> String {
    if block.is_last() {
        format!("{}\n\n{}", block.text(), next_task.announcement())
    } else if block.is_first() {
        format!(
            "The following are cross-component logs.\n\n\
             I may send the log in multiple parts. Please respond only after I indicate \
             that the final part has been provided.\n\n{}",
            block.text()
        )
    } else {
        format!(
            "{}\n\nLet me continue sending the log in blocks. Please wait for my signal \
             before responding.",
            block.text()
        )
    }
}

/// The user turn requesting construction of the interaction graph over the
/// full accumulated history.
pub fn interaction_graph_prompt() -> String {
    "Construct a cross-component interaction relationship graph from the logs and \
     return a JSON object that describes the interaction relationships. \
     Components refer to different frameworks, which may include Hive, Spark, Flink, Hadoop etc.\n\
     Instructions for constructing the graph:\n\
     1. Two components have an interaction relationship only if:\n\
     1.1 [component_A] directly interacts with a resource that [component_B] also utilizes.\n\
     1.2 [component_A] invokes [component_B], which utilizes the same resource.\n\
     For each object in the JSON output, use the format:\n\
     { [component_A]: [component_B] }\n\
     - If a specific interaction relationship exists, provide regular expressions that \
     can help developers extract the corresponding log lines.\n\
     - Describe your reasoning process for constructing the graph.\n\
     - Specify any assumptions made during the process.\n\
     Please ensure the output is in a structured JSON format."
        .to_string()
}

/// The user turn requesting classification of the just-produced graph into
/// the three interaction patterns, referencing the graph textually.
pub fn pattern_dispatch_prompt(interaction_pairs: &str) -> String {
    format!(
        "Based on the cross-component interaction pairs you identified from the logs in \
         the previous step, formatted as a list of tuples like: '{{ [component_A]: [component_B], ... }}'\n\
         {interaction_pairs}\n\
         your task is to classify each pair into one of the following **interaction patterns**:\n\
         Interaction Patterns (Enum: resource_invocation, abnormal_usage, shared_object):\n\
         - resource_invocation: [component_A] invokes [component_B], which utilizes a [resource].\n\
         - abnormal_usage: [component_A] and [component_B] both exhibit abnormal usage on a shared [resource].\n\
         - shared_object: [component_A] and [component_B] both use the same [resource] \
         (e.g., shared file, memory, or object).\n\n\
         [resource] can be a system resource such as memory, socket, I/O, disk usage, or an \
         abstract resource such as a file or container.\n\
         Your output must be a structured JSON object in the following format:\n\
         {{\n  \"[interaction_pattern]\": ([component_A], [component_B], [resource])\n}}\n\n\
         Instructions:\n\
         1. For each valid interaction pair, determine the correct interaction pattern from the enum.\n\
         2. Provide **regular expressions** that can be used to extract relevant log lines for each interaction.\n\
         3. Describe your **reasoning process** for assigning the interaction type.\n\
         4. Explicitly state any **assumptions** you make during classification or pattern matching.\n\n\
         Please ensure the final output is a valid JSON object that contains all detected \
         interaction patterns, with structured entries, reasoning, assumptions, and associated regexes.\n\
         Alongside the narrative classification, include a machine-readable \"edges\" array in \
         which each element is an object with the keys component_a, component_b, resource, \
         category (one of the enum values above), evidence_regexes, reasoning, and assumptions."
    )
}

/// The user turn asking the engine to fill one template from log evidence.
///
/// The closing instructions pin the exact output format the extractor
/// parses: the `### Completed Template` heading and `__name(value)__` blank
/// shape.
pub fn template_fill_prompt(template_id: &str, template_content: &str) -> String {
    format!(
        "In order to find cross-component issues from logs, here is a template that may \
         match the root cause. Try to fill the blanks in the template based on the logs \
         you've analyzed:\n\n\
         Template ID: {template_id}\n\
         Template Content:\n{template_content}\n\n\
         Instructions:\n\
         1. Fill in each blank (marked with []) based on evidence from the logs.\n\
         2. If you cannot fill a blank based on your analysis of the logs, fill in 'unknown'.\n\
         3. After filling the template, provide a detailed explanation for each filled blank:\n\
         - Which specific log lines provided the evidence\n\
         - If specific log lines exist, write regular expressions that can help developers \
         extract those log lines\n\
         - Your reasoning process\n\
         - Any assumptions you made\n\
         4. If you cannot provide specific log lines to justify a blank, still fill it with 'unknown'.\n\
         5. If you think there are multiple ways to fill the template, list every filled \
         version as a separate completed template.\n\n\
         Finally, please provide:\n\
         1. The completed template under a heading line reading exactly '### Completed Template', \
         with every filled blank written as __name(value)__ (double underscores on both sides).\n\
         2. A '### Reasoning' section explaining each filled value."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(position: usize, is_last: bool) -> LogBlock {
        LogBlock::new(vec![format!("line {position}")], position, is_last)
    }

    #[test]
    fn first_block_announces_multi_part_delivery() {
        let prompt = block_prompt(&block(0, false), NextTask::Templates);
        assert!(prompt.contains("multiple parts"));
        assert!(prompt.contains("final part"));
        assert!(prompt.ends_with("line 0"));
    }

    #[test]
    fn interior_block_repeats_the_wait_instruction() {
        let prompt = block_prompt(&block(1, false), NextTask::Templates);
        assert!(prompt.starts_with("line 1"));
        assert!(prompt.contains("wait for my signal"));
    }

    #[test]
    fn last_block_signals_completion_and_next_task() {
        let prompt = block_prompt(&block(2, true), NextTask::Templates);
        assert!(prompt.contains("final log block"));
        assert!(prompt.contains("templates"));

        let prompt = block_prompt(&block(2, true), NextTask::InteractionGraph);
        assert!(prompt.contains("interaction graph"));
    }

    #[test]
    fn single_block_uses_the_last_block_wording() {
        // A one-block delivery is both first and last; the completion signal wins.
        let prompt = block_prompt(&block(0, true), NextTask::Templates);
        assert!(prompt.contains("final log block"));
        assert!(!prompt.contains("multiple parts"));
    }

    #[test]
    fn dispatch_prompt_names_all_three_patterns() {
        let prompt = pattern_dispatch_prompt("{ Hive: Hadoop }");
        for pattern in ["resource_invocation", "abnormal_usage", "shared_object"] {
            assert!(prompt.contains(pattern));
        }
        assert!(prompt.contains("{ Hive: Hadoop }"));
        assert!(prompt.contains("\"edges\" array"));
    }

    #[test]
    fn fill_prompt_pins_the_extraction_wire_format() {
        let prompt = template_fill_prompt("welcome", "Root cause: [cause]");
        assert!(prompt.contains("### Completed Template"));
        assert!(prompt.contains("__name(value)__"));
        assert!(prompt.contains("Template ID: welcome"));
        assert!(prompt.contains("Root cause: [cause]"));
        assert!(prompt.contains("'unknown'"));
    }
}
