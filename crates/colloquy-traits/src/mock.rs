//! In-memory mock collaborators for tests.
//!
//! These mirror the trait seams closely enough to exercise every handler
//! path: recorded broadcasts, configurable orchestration outcomes, counted
//! transactions, and simple `Mutex<Vec<_>>` repositories.

use crate::errors::ConfigError;
use crate::orchestrator::ChatOrchestrator;
use crate::repository::{
    AgentRepository, ConversationAgentRepository, ConversationRepository, LlmConfigRepository,
    LlmModelCatalog, MessageRepository, PersonalityDefinitionsProvider, PersonalityRepository,
    RoleRepository, SettingsRepository,
};
use crate::surface::{RendererSurface, SurfaceRegistry};
use crate::transaction::{TransactionProvider, TransactionWork};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use colloquy_models::{
    AddConversationAgentInput, Agent, AgentLibrary, AppSettings, Conversation, ConversationAgent,
    CreateConversationInput, CreateMessageInput, LlmConfig, LlmConfigInput, LlmConfigPatch,
    LlmModel, Message, Personality, PersonalityLibrary, ProcessingResult, Role, RoleLibrary,
    SettingsPatch, UpdateConversationAgentInput, UpdateConversationInput,
};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// A renderer surface that records everything sent to it.
#[derive(Default)]
pub struct MockSurface {
    destroyed: AtomicBool,
    sent: Mutex<Vec<(String, Value)>>,
}

impl MockSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn destroyed() -> Arc<Self> {
        let surface = Self::default();
        surface.destroyed.store(true, Ordering::SeqCst);
        Arc::new(surface)
    }

    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
    }

    /// Payloads received on a channel, in arrival order.
    pub fn received_on(&self, channel: &str) -> Vec<Value> {
        self.sent
            .lock()
            .expect("mock surface lock")
            .iter()
            .filter(|(c, _)| c == channel)
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    pub fn received_count(&self) -> usize {
        self.sent.lock().expect("mock surface lock").len()
    }
}

impl RendererSurface for MockSurface {
    fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    fn send(&self, channel: &str, payload: Value) -> Result<()> {
        self.sent
            .lock()
            .expect("mock surface lock")
            .push((channel.to_string(), payload));
        Ok(())
    }
}

/// Registry over a fixed set of mock surfaces.
#[derive(Default)]
pub struct MockSurfaceRegistry {
    surfaces: Mutex<Vec<Arc<MockSurface>>>,
}

impl MockSurfaceRegistry {
    pub fn new(surfaces: Vec<Arc<MockSurface>>) -> Self {
        Self {
            surfaces: Mutex::new(surfaces),
        }
    }

    pub fn add(&self, surface: Arc<MockSurface>) {
        self.surfaces
            .lock()
            .expect("mock registry lock")
            .push(surface);
    }
}

impl SurfaceRegistry for MockSurfaceRegistry {
    fn surfaces(&self) -> Vec<Arc<dyn RendererSurface>> {
        self.surfaces
            .lock()
            .expect("mock registry lock")
            .iter()
            .map(|s| s.clone() as Arc<dyn RendererSurface>)
            .collect()
    }
}

enum OrchestratorOutcome {
    Succeed(ProcessingResult),
    Fail(String),
}

/// Orchestrator with a configurable outcome and a call counter.
pub struct MockOrchestrator {
    outcome: OrchestratorOutcome,
    calls: AtomicU32,
    last_args: Mutex<Option<(String, String)>>,
}

impl MockOrchestrator {
    pub fn succeeding(result: ProcessingResult) -> Self {
        Self {
            outcome: OrchestratorOutcome::Succeed(result),
            calls: AtomicU32::new(0),
            last_args: Mutex::new(None),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: OrchestratorOutcome::Fail(message.into()),
            calls: AtomicU32::new(0),
            last_args: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_args(&self) -> Option<(String, String)> {
        self.last_args.lock().expect("mock orchestrator lock").clone()
    }
}

#[async_trait]
impl ChatOrchestrator for MockOrchestrator {
    async fn process_user_message(
        &self,
        conversation_id: &str,
        user_message_id: &str,
    ) -> Result<ProcessingResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_args.lock().expect("mock orchestrator lock") =
            Some((conversation_id.to_string(), user_message_id.to_string()));
        match &self.outcome {
            OrchestratorOutcome::Succeed(result) => Ok(result.clone()),
            OrchestratorOutcome::Fail(message) => Err(anyhow!("{message}")),
        }
    }
}

/// Transaction provider that runs the work inline and counts invocations.
#[derive(Default)]
pub struct RecordingTransactionProvider {
    calls: AtomicU32,
}

impl RecordingTransactionProvider {
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionProvider for RecordingTransactionProvider {
    async fn transaction(&self, work: TransactionWork) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        work().await
    }
}

/// Settings repository over an in-memory value, with failure injection for
/// the reset ordering tests.
pub struct InMemorySettingsRepository {
    state: Mutex<AppSettings>,
    pub fail_load: AtomicBool,
    pub fail_save: AtomicBool,
    saves: AtomicU32,
    loads: AtomicU32,
}

impl Default for InMemorySettingsRepository {
    fn default() -> Self {
        Self {
            state: Mutex::new(AppSettings::default()),
            fail_load: AtomicBool::new(false),
            fail_save: AtomicBool::new(false),
            saves: AtomicU32::new(0),
            loads: AtomicU32::new(0),
        }
    }
}

impl InMemorySettingsRepository {
    pub fn save_count(&self) -> u32 {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn load_count(&self) -> u32 {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> AppSettings {
        self.state.lock().expect("settings lock").clone()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> Result<AppSettings> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(anyhow!("settings load failed"));
        }
        Ok(self.state.lock().expect("settings lock").clone())
    }

    async fn save(&self, patch: SettingsPatch) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(anyhow!("settings save failed"));
        }
        // Merge over defaults, matching the persistence contract.
        let mut next = AppSettings::default();
        next.apply(patch);
        *self.state.lock().expect("settings lock") = next;
        Ok(())
    }

    async fn set_debug_logging(&self, enabled: bool) -> Result<()> {
        self.state
            .lock()
            .expect("settings lock")
            .advanced
            .debug_logging = enabled;
        Ok(())
    }
}

/// Role library repository over an in-memory document.
#[derive(Default)]
pub struct InMemoryRoleRepository {
    library: Mutex<Option<RoleLibrary>>,
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn load(&self) -> Result<Option<RoleLibrary>> {
        Ok(self.library.lock().expect("roles lock").clone())
    }

    async fn save(&self, roles: Vec<Role>) -> Result<()> {
        *self.library.lock().expect("roles lock") = Some(RoleLibrary::new(roles));
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        *self.library.lock().expect("roles lock") = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPersonalityRepository {
    library: Mutex<Option<PersonalityLibrary>>,
}

#[async_trait]
impl PersonalityRepository for InMemoryPersonalityRepository {
    async fn load(&self) -> Result<Option<PersonalityLibrary>> {
        Ok(self.library.lock().expect("personalities lock").clone())
    }

    async fn save(&self, personalities: Vec<Personality>) -> Result<()> {
        *self.library.lock().expect("personalities lock") =
            Some(PersonalityLibrary::new(personalities));
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        *self.library.lock().expect("personalities lock") = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAgentRepository {
    library: Mutex<Option<AgentLibrary>>,
}

#[async_trait]
impl AgentRepository for InMemoryAgentRepository {
    async fn load(&self) -> Result<Option<AgentLibrary>> {
        Ok(self.library.lock().expect("agents lock").clone())
    }

    async fn save(&self, agents: Vec<Agent>) -> Result<()> {
        *self.library.lock().expect("agents lock") = Some(AgentLibrary::new(agents));
        Ok(())
    }

    async fn reset(&self) -> Result<()> {
        *self.library.lock().expect("agents lock") = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: Mutex<Vec<Conversation>>,
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, input: CreateConversationInput) -> Result<Conversation> {
        let conversation =
            Conversation::new(input.title.unwrap_or_else(|| "New Conversation".to_string()));
        self.conversations
            .lock()
            .expect("conversations lock")
            .push(conversation.clone());
        Ok(conversation)
    }

    async fn list(&self) -> Result<Vec<Conversation>> {
        Ok(self.conversations.lock().expect("conversations lock").clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Conversation>> {
        Ok(self
            .conversations
            .lock()
            .expect("conversations lock")
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn update(&self, id: &str, updates: UpdateConversationInput) -> Result<Conversation> {
        let mut guard = self.conversations.lock().expect("conversations lock");
        let conversation = guard
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| anyhow!("Conversation not found: {id}"))?;
        if let Some(title) = updates.title {
            conversation.title = title;
        }
        if let Some(is_active) = updates.is_active {
            conversation.is_active = is_active;
        }
        conversation.updated_at = colloquy_models::time::now_ms();
        Ok(conversation.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.conversations
            .lock()
            .expect("conversations lock")
            .retain(|c| c.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryConversationAgentRepository {
    records: Mutex<Vec<ConversationAgent>>,
    removes: AtomicU32,
    pub fail_remove: AtomicBool,
}

impl InMemoryConversationAgentRepository {
    pub fn with_records(records: Vec<ConversationAgent>) -> Self {
        Self {
            records: Mutex::new(records),
            removes: AtomicU32::new(0),
            fail_remove: AtomicBool::new(false),
        }
    }

    pub fn remove_count(&self) -> u32 {
        self.removes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConversationAgentRepository for InMemoryConversationAgentRepository {
    async fn get_by_conversation(&self, conversation_id: &str) -> Result<Vec<ConversationAgent>> {
        Ok(self
            .records
            .lock()
            .expect("conversation agents lock")
            .iter()
            .filter(|r| r.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    async fn add(&self, input: AddConversationAgentInput) -> Result<ConversationAgent> {
        let mut record = ConversationAgent::new(input.conversation_id, input.agent_id);
        if let Some(order) = input.display_order {
            record.display_order = order;
        }
        self.records
            .lock()
            .expect("conversation agents lock")
            .push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        conversation_id: &str,
        agent_id: &str,
        updates: UpdateConversationAgentInput,
    ) -> Result<ConversationAgent> {
        let mut guard = self.records.lock().expect("conversation agents lock");
        let record = guard
            .iter_mut()
            .find(|r| r.conversation_id == conversation_id && r.agent_id == agent_id)
            .ok_or_else(|| anyhow!("Conversation agent not found"))?;
        if let Some(is_active) = updates.is_active {
            record.is_active = is_active;
        }
        if let Some(order) = updates.display_order {
            record.display_order = order;
        }
        Ok(record.clone())
    }

    async fn remove(&self, conversation_id: &str, agent_id: &str) -> Result<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(anyhow!("conversation agent remove failed"));
        }
        self.records
            .lock()
            .expect("conversation agents lock")
            .retain(|r| !(r.conversation_id == conversation_id && r.agent_id == agent_id));
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ConversationAgent>> {
        Ok(self.records.lock().expect("conversation agents lock").clone())
    }
}

#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Mutex<Vec<Message>>,
    agent_deletes: AtomicU32,
}

impl InMemoryMessageRepository {
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: Mutex::new(messages),
            agent_deletes: AtomicU32::new(0),
        }
    }

    pub fn agent_delete_count(&self) -> u32 {
        self.agent_deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn list(&self, conversation_id: &str) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .expect("messages lock")
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    async fn create(&self, input: CreateMessageInput) -> Result<Message> {
        let message = Message::from_input(input);
        self.messages
            .lock()
            .expect("messages lock")
            .push(message.clone());
        Ok(message)
    }

    async fn update_inclusion(&self, message_id: &str, included: bool) -> Result<Message> {
        let mut guard = self.messages.lock().expect("messages lock");
        let message = guard
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or_else(|| anyhow!("Message not found: {message_id}"))?;
        message.included_in_context = included;
        Ok(message.clone())
    }

    async fn delete_for_conversation_agent(
        &self,
        conversation_id: &str,
        agent_id: &str,
    ) -> Result<u64> {
        self.agent_deletes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.messages.lock().expect("messages lock");
        let before = guard.len();
        guard.retain(|m| {
            !(m.conversation_id == conversation_id && m.agent_id.as_deref() == Some(agent_id))
        });
        Ok((before - guard.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryLlmConfigRepository {
    configs: Mutex<Vec<LlmConfig>>,
    initialized: AtomicBool,
    refreshes: AtomicU32,
}

impl InMemoryLlmConfigRepository {
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn refresh_count(&self) -> u32 {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmConfigRepository for InMemoryLlmConfigRepository {
    async fn create(&self, input: LlmConfigInput) -> Result<LlmConfig> {
        let mut guard = self.configs.lock().expect("llm configs lock");
        if guard.iter().any(|c| c.name == input.name) {
            return Err(ConfigError::DuplicateName { name: input.name }.into());
        }
        let config = LlmConfig::from_input(input);
        guard.push(config.clone());
        Ok(config)
    }

    async fn read(&self, id: &str) -> Result<Option<LlmConfig>> {
        Ok(self
            .configs
            .lock()
            .expect("llm configs lock")
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn update(&self, id: &str, updates: LlmConfigPatch) -> Result<LlmConfig> {
        let mut guard = self.configs.lock().expect("llm configs lock");
        let config = guard
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ConfigError::NotFound { id: id.to_string() })?;
        if let Some(name) = updates.name {
            config.name = name;
        }
        if let Some(model) = updates.model {
            config.model = model;
        }
        if let Some(base_url) = updates.base_url {
            config.base_url = Some(base_url);
        }
        config.updated_at = colloquy_models::time::now_ms();
        Ok(config.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut guard = self.configs.lock().expect("llm configs lock");
        let before = guard.len();
        guard.retain(|c| c.id != id);
        if guard.len() == before {
            return Err(ConfigError::NotFound { id: id.to_string() }.into());
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<LlmConfig>> {
        Ok(self.configs.lock().expect("llm configs lock").clone())
    }

    async fn initialize(&self) -> Result<()> {
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn refresh_cache(&self) -> Result<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Model catalog over a fixed list.
#[derive(Default)]
pub struct StaticModelCatalog {
    pub models: Vec<LlmModel>,
}

#[async_trait]
impl LlmModelCatalog for StaticModelCatalog {
    async fn load(&self) -> Result<Vec<LlmModel>> {
        Ok(self.models.clone())
    }
}

/// Definitions provider over a fixed document.
pub struct StaticDefinitionsProvider {
    pub definitions: Value,
}

#[async_trait]
impl PersonalityDefinitionsProvider for StaticDefinitionsProvider {
    async fn get_definitions(&self) -> Result<Value> {
        Ok(self.definitions.clone())
    }
}
