use std::sync::Arc;

use parking_lot::Mutex;

use sr_protos::ivm::slam::SessionInfo;

// ---

/// The current session, as the relay knows it.
///
/// At most one session is live at a time; `total_chunks` is deliberately not
/// here, the chunk store is the authority on that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRecord {
    /// Opaque id assigned by the producer; empty means "no session".
    pub session_id: String,

    /// RFC 3339; empty when no session has started.
    pub start_time: String,

    pub is_active: bool,
    pub clients_connected: i32,
}

impl SessionRecord {
    /// A record for a session starting right now.
    pub fn started_now(session_id: String) -> Self {
        Self {
            session_id,
            start_time: jiff::Timestamp::now().to_string(),
            is_active: true,
            clients_connected: 0,
        }
    }

    /// A session is *live* iff it is active and actually has an id.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.is_active && !self.session_id.is_empty()
    }
}

// ---

/// Holds the single current [`SessionRecord`]; all mutations are serialized.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<SessionRecord>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> SessionRecord {
        self.inner.lock().clone()
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.inner.lock().is_live()
    }

    /// Replaces the whole record.
    pub fn update(&self, record: SessionRecord) {
        let mut inner = self.inner.lock();
        sr_log::info!(
            "session update: '{}' -> '{}' (active: {} -> {})",
            inner.session_id,
            record.session_id,
            inner.is_active,
            record.is_active
        );
        *inner = record;
    }

    /// Applies a control-plane `SessionInfo` message, all four fields.
    pub fn update_from_control(&self, info: &SessionInfo) {
        self.update(SessionRecord {
            session_id: info.session_id.clone(),
            start_time: info.start_time.clone(),
            is_active: info.is_active,
            clients_connected: info.clients_connected,
        });
    }

    /// Back to the empty record: no id, inactive, zero clients.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        sr_log::info!("clearing session '{}'", inner.session_id);
        *inner = SessionRecord::default();
    }

    pub fn set_active(&self, is_active: bool) {
        self.inner.lock().is_active = is_active;
    }

    pub fn increment_clients(&self) -> i32 {
        let mut inner = self.inner.lock();
        inner.clients_connected += 1;
        inner.clients_connected
    }

    /// Never goes below zero, even if releases outnumber acquires.
    pub fn decrement_clients(&self) -> i32 {
        let mut inner = self.inner.lock();
        inner.clients_connected = (inner.clients_connected - 1).max(0);
        inner.clients_connected
    }
}

// ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_needs_both_active_and_an_id() {
        let registry = SessionRegistry::new();
        assert!(!registry.is_live());

        registry.set_active(true);
        assert!(!registry.is_live(), "active but empty id is not live");

        registry.update(SessionRecord::started_now("SLAM-1".to_owned()));
        assert!(registry.is_live());

        registry.set_active(false);
        assert!(!registry.is_live());
    }

    #[test]
    fn clear_resets_every_field() {
        let registry = SessionRegistry::new();
        registry.update(SessionRecord::started_now("SLAM-1".to_owned()));
        registry.increment_clients();

        registry.clear();
        assert_eq!(registry.get(), SessionRecord::default());
    }

    #[test]
    fn client_count_floors_at_zero() {
        let registry = SessionRegistry::new();
        assert_eq!(registry.increment_clients(), 1);
        assert_eq!(registry.increment_clients(), 2);
        assert_eq!(registry.decrement_clients(), 1);
        assert_eq!(registry.decrement_clients(), 0);
        assert_eq!(registry.decrement_clients(), 0);
    }
}
