use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vermeer_analysis::{analysis_system_prompt, NextTask, SessionExecutor};
use vermeer_core::{Completion, CompletionRequest, ConversationSession, LogBlock, Role};
use vermeer_error::{EngineError, EngineErrorKind, VermeerResult};
use vermeer_interface::CompletionDriver;

/// Mock driver that records every request it receives and answers with a
/// numbered acknowledgement.
struct RecordingDriver {
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl RecordingDriver {
    fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionDriver for RecordingDriver {
    async fn complete(&self, request: &CompletionRequest) -> VermeerResult<Completion> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        Ok(Completion {
            text: format!("Ack {}", requests.len()),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Mock driver that fails on a chosen call number.
struct FailingDriver {
    fail_on: usize,
    calls: Arc<Mutex<usize>>,
}

#[async_trait]
impl CompletionDriver for FailingDriver {
    async fn complete(&self, _request: &CompletionRequest) -> VermeerResult<Completion> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls == self.fail_on {
            return Err(EngineError::new(EngineErrorKind::Timeout(1)).into());
        }
        Ok(Completion {
            text: format!("Ack {}", *calls),
        })
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing-model-v1"
    }
}

fn blocks(count: usize) -> Vec<LogBlock> {
    (0..count)
        .map(|i| LogBlock::new(vec![format!("line {i}")], i, i + 1 == count))
        .collect()
}

#[tokio::test]
async fn third_turn_resends_the_first_five_messages_in_order() {
    let driver = RecordingDriver::new();
    let requests = driver.requests.clone();
    let executor = SessionExecutor::new(driver);
    let mut session = ConversationSession::new();

    executor.seed(&mut session, analysis_system_prompt());
    executor
        .deliver_blocks(&mut session, &blocks(3), NextTask::InteractionGraph)
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 3);

    // The 3rd user turn carries exactly messages 1-5 plus the new user turn.
    let third = &requests[2];
    assert_eq!(third.messages.len(), 6);
    let roles: Vec<Role> = third.messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::System,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
        ]
    );
    assert_eq!(third.messages[2].content, "Ack 1");
    assert_eq!(third.messages[4].content, "Ack 2");
    // Sequence numbers survive the resend untouched.
    let sequences: Vec<u64> = third.messages.iter().map(|m| m.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn every_request_carries_the_full_history_so_far() {
    let driver = RecordingDriver::new();
    let requests = driver.requests.clone();
    let executor = SessionExecutor::new(driver);
    let mut session = ConversationSession::new();

    executor.seed(&mut session, analysis_system_prompt());
    executor
        .deliver_blocks(&mut session, &blocks(4), NextTask::InteractionGraph)
        .await
        .unwrap();

    for (call, request) in requests.lock().unwrap().iter().enumerate() {
        // Call k+1 sees system + k user/assistant pairs + the new user turn.
        assert_eq!(request.messages.len(), 2 * (call + 1));
    }
}

#[tokio::test]
async fn block_delivery_alternates_user_and_assistant_turns() {
    let driver = RecordingDriver::new();
    let executor = SessionExecutor::new(driver);
    let mut session = ConversationSession::new();

    executor.seed(&mut session, analysis_system_prompt());
    executor
        .deliver_blocks(&mut session, &blocks(3), NextTask::InteractionGraph)
        .await
        .unwrap();

    let history = session.history();
    assert_eq!(history.len(), 7);
    assert_eq!(history[0].role, Role::System);
    for pair in history[1..].chunks(2) {
        assert_eq!(pair[0].role, Role::User);
        assert_eq!(pair[1].role, Role::Assistant);
    }
}

#[tokio::test]
async fn an_engine_failure_abandons_the_remaining_blocks() {
    let calls = Arc::new(Mutex::new(0));
    let driver = FailingDriver {
        fail_on: 2,
        calls: calls.clone(),
    };
    let executor = SessionExecutor::new(driver);
    let mut session = ConversationSession::new();

    executor.seed(&mut session, analysis_system_prompt());
    let result = executor
        .deliver_blocks(&mut session, &blocks(4), NextTask::InteractionGraph)
        .await;

    assert!(result.is_err());
    // The failing call is the last one issued; blocks 3 and 4 never go out.
    assert_eq!(*calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn graph_and_dispatch_steps_extend_the_same_session() {
    let driver = RecordingDriver::new();
    let requests = driver.requests.clone();
    let executor = SessionExecutor::new(driver);
    let mut session = ConversationSession::new();

    executor.seed(&mut session, analysis_system_prompt());
    executor
        .deliver_blocks(&mut session, &blocks(2), NextTask::InteractionGraph)
        .await
        .unwrap();

    let graph = executor
        .extract_interaction_graph(&mut session)
        .await
        .unwrap();
    assert_eq!(graph, "Ack 3");

    let dispatched = executor
        .dispatch_patterns(&mut session, &graph)
        .await
        .unwrap();
    assert_eq!(dispatched, "Ack 4");

    let requests = requests.lock().unwrap();
    // The dispatch prompt references the graph completion textually.
    let dispatch_prompt = &requests[3].messages.last().unwrap().content;
    assert!(dispatch_prompt.contains("Ack 3"));
    // And the dispatch request still begins with the original system seed.
    assert_eq!(requests[3].messages[0].role, Role::System);
    assert_eq!(requests[3].messages.len(), session.history().len() - 1);
}

#[tokio::test]
async fn diagnose_template_appends_one_turn_pair_per_template() {
    let driver = RecordingDriver::new();
    let requests = driver.requests.clone();
    let executor = SessionExecutor::new(driver);
    let mut session = ConversationSession::new();

    executor.seed(&mut session, analysis_system_prompt());
    executor
        .deliver_blocks(&mut session, &blocks(1), NextTask::Templates)
        .await
        .unwrap();
    let before = session.history().len();

    let first = executor
        .diagnose_template(&mut session, "welcome", "Root cause: [cause]")
        .await
        .unwrap();
    let second = executor
        .diagnose_template(&mut session, "sub_err", "Error: [error]")
        .await
        .unwrap();

    assert_eq!(first, "Ack 2");
    assert_eq!(second, "Ack 3");
    assert_eq!(session.history().len(), before + 4);

    let requests = requests.lock().unwrap();
    let first_prompt = &requests[1].messages.last().unwrap().content;
    assert!(first_prompt.contains("Template ID: welcome"));
    assert!(first_prompt.contains("Root cause: [cause]"));
    // The second template's request still carries the first diagnosis pair.
    assert_eq!(requests[2].messages.len(), requests[1].messages.len() + 2);
}
