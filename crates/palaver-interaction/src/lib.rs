//! Session interaction layer.
//!
//! [`SessionController`] owns the directory, the conversation store, and
//! the session state, and mediates every mutation. Each user action is a
//! synchronous, atomic transition: it is validated first, applied to
//! completion, and on error leaves all state unchanged. The store is
//! mutated exclusively through its append path, and only the controller
//! issues appends, so the single-writer discipline falls out of `&mut
//! self` for free.

use chrono::Local;
use rand::Rng;

use palaver_core::conversation::{ConversationStore, Direction, Message, seed_store};
use palaver_core::directory::{Directory, Entity, EntityId};
use palaver_core::error::{PalaverError, Result};
use palaver_core::session::{SessionEvent, SessionState};
use palaver_core::timeline::{DateGroup, group_by_date};

/// Mediates all session transitions and exposes the render query surface.
///
/// The controller starts logged out. Conversations are seeded once at
/// construction and survive logout/login cycles; there is no persistence
/// beyond the controller's lifetime.
pub struct SessionController {
    /// Static contact catalog
    directory: Directory,
    /// Per-entity message histories
    store: ConversationStore,
    /// Present while a user is logged in
    session: Option<SessionState>,
}

impl SessionController {
    /// Creates a controller over the given directory, seeding every
    /// conversation with a synthetic history.
    pub fn new(directory: Directory) -> Self {
        Self::with_rng(directory, &mut rand::thread_rng())
    }

    /// Creates a controller with a caller-supplied random source, so tests
    /// can seed history deterministically.
    pub fn with_rng<R: Rng>(directory: Directory, rng: &mut R) -> Self {
        let store = seed_store(&directory, Local::now().date_naive(), rng);
        Self {
            directory,
            store,
            session: None,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Logs in as `entity_id` and opens the first other entity's
    /// conversation.
    ///
    /// The default selection is the first directory entity in registration
    /// order excluding the current user, keyed by id. `None` if no other
    /// entity exists.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLoggedIn` if a session exists, `InvalidEntity` if
    /// the id does not resolve in the directory.
    pub fn login(&mut self, entity_id: EntityId) -> Result<()> {
        if let Some(session) = &self.session {
            return Err(PalaverError::AlreadyLoggedIn {
                id: session.current_user,
            });
        }
        if !self.directory.contains(entity_id) {
            return Err(PalaverError::unknown_entity(entity_id));
        }

        let active_entity = self
            .directory
            .list()
            .iter()
            .map(|entity| entity.id)
            .find(|id| *id != entity_id);

        tracing::debug!(user = entity_id, active = ?active_entity, "login");
        self.session = Some(SessionState::new(entity_id, active_entity));
        Ok(())
    }

    /// Ends the session.
    ///
    /// Clears the session state entirely; conversations stay in memory and
    /// survive the next login.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` if no session exists.
    pub fn logout(&mut self) -> Result<()> {
        let session = self.session.take().ok_or(PalaverError::NotLoggedIn)?;
        tracing::debug!(user = session.current_user, "logout");
        Ok(())
    }

    /// Opens `entity_id`'s conversation.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` without a session, `InvalidEntity` if the id
    /// is the current user's own (self-chat is disallowed) or unknown.
    pub fn select_entity(&mut self, entity_id: EntityId) -> Result<()> {
        let current_user = self
            .session
            .as_ref()
            .ok_or(PalaverError::NotLoggedIn)?
            .current_user;

        if entity_id == current_user {
            return Err(PalaverError::disallowed_entity(
                entity_id,
                "self-chat is disallowed",
            ));
        }
        let entity = self
            .directory
            .find(entity_id)
            .ok_or_else(|| PalaverError::unknown_entity(entity_id))?;
        tracing::debug!(user = current_user, entity = entity_id, kind = %entity.kind, "entity selected");

        if let Some(session) = self.session.as_mut() {
            session.active_entity = Some(entity_id);
        }
        Ok(())
    }

    /// Replaces the contact search filter. The store is untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` without a session.
    pub fn set_search_filter(&mut self, text: impl Into<String>) -> Result<()> {
        let session = self.session.as_mut().ok_or(PalaverError::NotLoggedIn)?;
        session.search_filter = text.into();
        Ok(())
    }

    /// Sends `text` to the active entity's conversation.
    ///
    /// The message is stamped with today's date and the current display
    /// time, marked `Sent`, and appended through the store's id-assigning
    /// path. Selection and filter are unaffected.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` without a session, `EmptyMessage` if the
    /// trimmed text is empty, `NoActiveConversation` if no conversation is
    /// open.
    pub fn send_message(&mut self, text: &str) -> Result<&Message> {
        let session = self.session.as_ref().ok_or(PalaverError::NotLoggedIn)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(PalaverError::EmptyMessage);
        }

        let user = session.current_user;
        let target = session
            .active_entity
            .ok_or(PalaverError::NoActiveConversation)?;

        let now = Local::now();
        let message = Message::new(
            trimmed,
            Direction::Sent,
            now.format("%I:%M %p").to_string(),
            now.date_naive(),
        );

        let stored = self.store.append(target, message)?;
        tracing::debug!(user, entity = target, id = stored.id, "message sent");
        Ok(stored)
    }

    /// Dispatches one input event to its transition.
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<()> {
        match event {
            SessionEvent::Login { entity_id } => self.login(entity_id),
            SessionEvent::Logout => self.logout(),
            SessionEvent::SelectEntity { entity_id } => self.select_entity(entity_id),
            SessionEvent::SetSearchFilter { text } => self.set_search_filter(text),
            SessionEvent::SendMessage { text } => self.send_message(&text).map(|_| ()),
        }
    }

    // ========================================================================
    // Query surface
    // ========================================================================

    /// The current session state, or `None` when logged out.
    pub fn session_state(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// The static catalog behind this controller.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Read access to the conversation store.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Contacts whose display name case-insensitively contains the search
    /// filter, excluding the current user.
    ///
    /// A pure function of directory and session state, recomputed on every
    /// call and never cached. Empty while logged out.
    pub fn filtered_entities(&self) -> Vec<&Entity> {
        let Some(session) = &self.session else {
            return Vec::new();
        };

        let needle = session.search_filter.to_lowercase();
        self.directory
            .list()
            .iter()
            .filter(|entity| entity.id != session.current_user)
            .filter(|entity| entity.display_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The date-bucketed, most-recent-first view of a conversation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntity` for ids not in the directory.
    pub fn conversation_groups(&self, entity_id: EntityId) -> Result<Vec<DateGroup>> {
        if !self.directory.contains(entity_id) {
            return Err(PalaverError::unknown_entity(entity_id));
        }
        Ok(group_by_date(self.store.get(entity_id)))
    }

    /// Text of an entity's most recent message; `None` means "no messages
    /// yet".
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntity` for ids not in the directory.
    pub fn last_message_preview(&self, entity_id: EntityId) -> Result<Option<&str>> {
        if !self.directory.contains(entity_id) {
            return Err(PalaverError::unknown_entity(entity_id));
        }
        Ok(self
            .store
            .last_message(entity_id)
            .map(|message| message.text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palaver_core::conversation::{GROUP_HISTORY_LEN, INDIVIDUAL_HISTORY_LEN};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn directory() -> Directory {
        Directory::new(vec![
            Entity::individual(1, "Alice"),
            Entity::group(2, "TeamX", ["Bob", "Carol"]),
        ])
    }

    fn controller() -> SessionController {
        SessionController::with_rng(directory(), &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_login_sets_default_active_entity() {
        let mut controller = controller();
        controller.login(1).unwrap();

        let state = controller.session_state().unwrap();
        assert_eq!(state.current_user, 1);
        assert_eq!(state.active_entity, Some(2));
        assert!(state.search_filter.is_empty());
    }

    #[test]
    fn test_login_skips_self_for_default_selection() {
        let mut controller = controller();
        controller.login(2).unwrap();
        assert_eq!(controller.session_state().unwrap().active_entity, Some(1));
    }

    #[test]
    fn test_login_unknown_entity_is_rejected() {
        let mut controller = controller();
        let err = controller.login(99).unwrap_err();
        assert!(err.is_invalid_entity());
        assert!(controller.session_state().is_none());
    }

    #[test]
    fn test_login_twice_is_rejected() {
        let mut controller = controller();
        controller.login(1).unwrap();
        let err = controller.login(2).unwrap_err();
        assert_eq!(err, PalaverError::AlreadyLoggedIn { id: 1 });
        assert_eq!(controller.session_state().unwrap().current_user, 1);
    }

    #[test]
    fn test_transitions_require_login() {
        let mut controller = controller();
        assert_eq!(controller.logout(), Err(PalaverError::NotLoggedIn));
        assert_eq!(controller.select_entity(2), Err(PalaverError::NotLoggedIn));
        assert_eq!(
            controller.set_search_filter("team"),
            Err(PalaverError::NotLoggedIn)
        );
        assert_eq!(
            controller.send_message("hi").unwrap_err(),
            PalaverError::NotLoggedIn
        );
    }

    #[test]
    fn test_select_self_is_rejected_and_selection_unchanged() {
        let mut controller = controller();
        controller.login(1).unwrap();

        let err = controller.select_entity(1).unwrap_err();
        assert!(err.is_invalid_entity());
        assert_eq!(controller.session_state().unwrap().active_entity, Some(2));
    }

    #[test]
    fn test_select_unknown_is_rejected() {
        let mut controller = controller();
        controller.login(1).unwrap();

        let err = controller.select_entity(99).unwrap_err();
        assert!(err.is_invalid_entity());
        assert_eq!(controller.session_state().unwrap().active_entity, Some(2));
    }

    #[test]
    fn test_blank_sends_are_rejected() {
        let mut controller = controller();
        controller.login(1).unwrap();
        let before = controller.store().len(2);

        assert!(controller.send_message("").unwrap_err().is_empty_message());
        assert!(controller.send_message("   ").unwrap_err().is_empty_message());
        assert_eq!(controller.store().len(2), before);
    }

    #[test]
    fn test_send_appends_to_active_conversation() {
        let mut controller = controller();
        controller.login(1).unwrap();
        controller.select_entity(2).unwrap();

        let today = Local::now().date_naive();
        let sent = controller.send_message("hi").unwrap().clone();
        assert_eq!(sent.text, "hi");
        assert_eq!(sent.direction, Direction::Sent);
        assert_eq!(sent.date, today);
        assert_eq!(sent.id, GROUP_HISTORY_LEN);
        assert_eq!(sent.sender_name, None);

        assert_eq!(controller.store().len(2), GROUP_HISTORY_LEN + 1);

        let groups = controller.conversation_groups(2).unwrap();
        assert_eq!(groups[0].date, today);
        assert_eq!(groups[0].messages.last(), Some(&sent));
        assert_eq!(groups[0].label(today), "Today");
    }

    #[test]
    fn test_send_trims_whitespace() {
        let mut controller = controller();
        controller.login(2).unwrap();

        let sent = controller.send_message("  hello  ").unwrap();
        assert_eq!(sent.text, "hello");
    }

    #[test]
    fn test_send_leaves_selection_and_filter_alone() {
        let mut controller = controller();
        controller.login(1).unwrap();
        controller.set_search_filter("team").unwrap();

        controller.send_message("hi").unwrap();

        let state = controller.session_state().unwrap();
        assert_eq!(state.active_entity, Some(2));
        assert_eq!(state.search_filter, "team");
    }

    #[test]
    fn test_logout_preserves_conversations() {
        let mut controller = controller();
        controller.login(1).unwrap();
        controller.send_message("still here?").unwrap();
        let before = controller.store().get(2).to_vec();

        controller.logout().unwrap();
        assert!(controller.session_state().is_none());

        controller.login(1).unwrap();
        assert_eq!(controller.store().get(2), &before[..]);
        assert_eq!(
            controller.last_message_preview(2).unwrap(),
            Some("still here?")
        );
    }

    #[test]
    fn test_logout_resets_filter_and_selection() {
        let mut controller = controller();
        controller.login(1).unwrap();
        controller.set_search_filter("team").unwrap();
        controller.logout().unwrap();

        controller.login(1).unwrap();
        let state = controller.session_state().unwrap();
        assert!(state.search_filter.is_empty());
        assert_eq!(state.active_entity, Some(2));
    }

    #[test]
    fn test_filtered_entities_match_case_insensitively() {
        let mut controller = controller();
        controller.login(1).unwrap();
        controller.set_search_filter("team").unwrap();

        let names: Vec<_> = controller
            .filtered_entities()
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(names, ["TeamX"]);
    }

    #[test]
    fn test_filtered_entities_exclude_current_user() {
        let mut controller = controller();
        controller.login(1).unwrap();

        let ids: Vec<_> = controller.filtered_entities().iter().map(|e| e.id).collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn test_filtered_entities_empty_when_logged_out() {
        let controller = controller();
        assert!(controller.filtered_entities().is_empty());
    }

    #[test]
    fn test_seeded_histories_have_expected_depth() {
        let controller = controller();
        assert_eq!(controller.store().len(1), INDIVIDUAL_HISTORY_LEN);
        assert_eq!(controller.store().len(2), GROUP_HISTORY_LEN);
    }

    #[test]
    fn test_conversation_groups_unknown_entity_is_rejected() {
        let controller = controller();
        assert!(controller.conversation_groups(99).unwrap_err().is_invalid_entity());
        assert!(controller.last_message_preview(99).unwrap_err().is_invalid_entity());
    }

    #[test]
    fn test_conversation_groups_are_strictly_descending() {
        let controller = controller();
        let groups = controller.conversation_groups(1).unwrap();

        // 100 messages in batches of 10 span 10 distinct days
        assert_eq!(groups.len(), 10);
        assert!(groups.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_send_without_other_entities_is_rejected() {
        let lonely = Directory::new(vec![Entity::individual(1, "Alice")]);
        let mut controller =
            SessionController::with_rng(lonely, &mut StdRng::seed_from_u64(42));
        controller.login(1).unwrap();

        assert_eq!(controller.session_state().unwrap().active_entity, None);
        assert_eq!(
            controller.send_message("hi").unwrap_err(),
            PalaverError::NoActiveConversation
        );
    }

    #[test]
    fn test_handle_event_dispatches_transitions() {
        let mut controller = controller();
        controller
            .handle_event(SessionEvent::Login { entity_id: 1 })
            .unwrap();
        controller
            .handle_event(SessionEvent::SelectEntity { entity_id: 2 })
            .unwrap();
        controller
            .handle_event(SessionEvent::SetSearchFilter {
                text: "team".to_string(),
            })
            .unwrap();
        controller
            .handle_event(SessionEvent::SendMessage {
                text: "hi".to_string(),
            })
            .unwrap();

        assert_eq!(controller.store().len(2), GROUP_HISTORY_LEN + 1);

        controller.handle_event(SessionEvent::Logout).unwrap();
        assert!(controller.session_state().is_none());
    }
}
