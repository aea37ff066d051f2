//! Protocol execution against a completion driver.

use crate::prompts;
use crate::prompts::NextTask;
use vermeer_core::{CompletionRequest, ConversationSession, EngineConfig, LogBlock, Role};
use vermeer_error::VermeerResult;
use vermeer_interface::CompletionDriver;

/// Executes protocol steps by submitting the full session history to the
/// reasoning engine and appending each completion before the next turn.
///
/// Turns are strictly alternating and strictly sequential within one
/// session: later steps depend on the engine having integrated all prior
/// context, so no reordering or speculative pipelining happens here. An
/// engine failure propagates immediately and abandons the session's
/// remaining steps.
pub struct SessionExecutor<D: CompletionDriver> {
    driver: D,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl<D: CompletionDriver> SessionExecutor<D> {
    /// Create an executor with the given driver and no request overrides.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Create an executor whose requests carry the engine settings from
    /// configuration.
    pub fn with_engine_config(driver: D, config: &EngineConfig) -> Self {
        Self {
            driver,
            model: Some(config.model().clone()),
            temperature: Some(*config.temperature()),
            max_tokens: *config.max_tokens(),
        }
    }

    /// Access the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Seed the session with exactly one system message.
    ///
    /// Call once, before any block is delivered.
    pub fn seed(&self, session: &mut ConversationSession, system_prompt: impl Into<String>) {
        debug_assert!(session.is_empty(), "session already seeded");
        session.add(Role::System, system_prompt);
    }

    /// Deliver the ordered block sequence, one user turn per block.
    ///
    /// After every user turn exactly one completion is requested and
    /// appended as an assistant turn before the next block is sent.
    ///
    /// # Errors
    ///
    /// Returns the first engine error encountered; remaining blocks are not
    /// delivered.
    #[tracing::instrument(skip(self, session, blocks), fields(session_id = %session.id(), block_count = blocks.len()))]
    pub async fn deliver_blocks(
        &self,
        session: &mut ConversationSession,
        blocks: &[LogBlock],
        next_task: NextTask,
    ) -> VermeerResult<()> {
        for block in blocks {
            tracing::debug!(
                position = block.position(),
                lines = block.len(),
                is_last = block.is_last(),
                "Delivering log block"
            );
            self.submit(session, prompts::block_prompt(block, next_task))
                .await?;
        }
        Ok(())
    }

    /// Request construction of the interaction graph over the accumulated
    /// history and return the completion verbatim.
    #[tracing::instrument(skip(self, session), fields(session_id = %session.id()))]
    pub async fn extract_interaction_graph(
        &self,
        session: &mut ConversationSession,
    ) -> VermeerResult<String> {
        self.submit(session, prompts::interaction_graph_prompt())
            .await
    }

    /// Request classification of the given graph text into the three
    /// interaction patterns and return the completion verbatim.
    #[tracing::instrument(skip(self, session, interaction_pairs), fields(session_id = %session.id()))]
    pub async fn dispatch_patterns(
        &self,
        session: &mut ConversationSession,
        interaction_pairs: &str,
    ) -> VermeerResult<String> {
        self.submit(session, prompts::pattern_dispatch_prompt(interaction_pairs))
            .await
    }

    /// Issue the fill-in-the-blanks turn for one template and return the
    /// completion verbatim for extraction.
    ///
    /// Single-shot per template; templates are processed independently and
    /// sequentially against the same cumulative session.
    #[tracing::instrument(skip(self, session, template_content), fields(session_id = %session.id(), template_id = %template_id))]
    pub async fn diagnose_template(
        &self,
        session: &mut ConversationSession,
        template_id: &str,
        template_content: &str,
    ) -> VermeerResult<String> {
        self.submit(
            session,
            prompts::template_fill_prompt(template_id, template_content),
        )
        .await
    }

    /// Append one user turn, request one completion against the full
    /// history, and append it as an assistant turn.
    async fn submit(
        &self,
        session: &mut ConversationSession,
        prompt: String,
    ) -> VermeerResult<String> {
        session.add(Role::User, prompt);

        let request = CompletionRequest {
            messages: session.history().to_vec(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            model: self.model.clone(),
        };

        let completion = self.driver.complete(&request).await?;
        session.add(Role::Assistant, completion.text.clone());
        Ok(completion.text)
    }
}
