use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::session::SessionRegistry;

// ---

/// Timing knobs of the activity monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorConfig {
    /// How long ingestion may be silent before an inactive session is torn
    /// down.
    pub timeout: Duration,

    /// The shortcut taken once control has already reported the session
    /// inactive: teardown does not wait out the full `timeout`, only this.
    pub quick_exit: Duration,

    /// Cadence of the monitor loop.
    pub tick_interval: Duration,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        timeout: Duration::from_secs(5),
        quick_exit: Duration::from_secs(2),
        tick_interval: Duration::from_secs(1),
    };
}

impl Default for MonitorConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---

type TeardownCallback = Box<dyn Fn() -> anyhow::Result<()> + Send + Sync + 'static>;

#[derive(Default)]
struct ActivityState {
    last_activity: Option<Instant>,
    has_received_data: bool,
    has_had_active_session: bool,
}

/// Watches ingestion activity and the session registry, and tears the
/// session down once the producer is gone.
///
/// The producer can fail or disconnect without ever sending an explicit
/// "end", so end-of-session is inferred: a session was live at some point,
/// control now reports it inactive, and ingestion has been silent long
/// enough. Registered teardown callbacks then run in order, each in a
/// protected scope, and the monitor resets itself for the next session — it
/// is built to sit through many sequential sessions.
#[derive(Clone)]
pub struct ActivityMonitor {
    inner: Arc<MonitorInner>,
}

struct MonitorInner {
    config: MonitorConfig,
    sessions: SessionRegistry,
    state: Mutex<ActivityState>,
    callbacks: Mutex<Vec<TeardownCallback>>,
    running: AtomicBool,
}

impl ActivityMonitor {
    pub fn new(config: MonitorConfig, sessions: SessionRegistry) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                config,
                sessions,
                state: Mutex::new(ActivityState::default()),
                callbacks: Mutex::new(Vec::new()),
                running: AtomicBool::new(false),
            }),
        }
    }

    #[inline]
    pub fn config(&self) -> MonitorConfig {
        self.inner.config
    }

    /// Records producer activity: ingestion and control both call this.
    pub fn update_activity(&self) {
        let mut state = self.inner.state.lock();
        state.last_activity = Some(Instant::now());
        if !state.has_received_data {
            state.has_received_data = true;
            sr_log::info!("first data received, activity monitoring live");
        }
    }

    /// Registers a teardown callback. Callbacks run in registration order; a
    /// failing callback is logged and does not stop the rest.
    pub fn on_teardown(
        &self,
        callback: impl Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    ) {
        self.inner.callbacks.lock().push(Box::new(callback));
    }

    /// Spawns the monitor loop; it evaluates once per `tick_interval` until
    /// [`Self::stop`].
    pub fn spawn(&self) -> tokio::task::JoinHandle<()> {
        self.inner.running.store(true, Ordering::SeqCst);
        let monitor = self.clone();
        tokio::spawn(async move {
            sr_log::debug!("activity monitor started");
            while monitor.inner.running.load(Ordering::SeqCst) {
                tokio::time::sleep(monitor.inner.config.tick_interval).await;
                monitor.tick();
            }
            sr_log::debug!("activity monitor stopped");
        })
    }

    /// Makes the loop exit at its next tick.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
    }

    /// One evaluation of the end-of-session condition.
    ///
    /// Fires iff: a live session has been observed, control currently
    /// reports inactive, and ingestion is stale — either past the full
    /// `timeout` (or never seen at all), or past `quick_exit` now that
    /// control has confirmed the session is over.
    pub(crate) fn tick(&self) {
        let session = self.inner.sessions.get();
        let now = Instant::now();

        let fire = {
            let mut state = self.inner.state.lock();

            if session.is_live() {
                if !state.has_had_active_session {
                    sr_log::info!("first live session observed: '{}'", session.session_id);
                }
                state.has_had_active_session = true;
            }

            let since_activity = state
                .last_activity
                .map_or(Duration::MAX, |at| now.duration_since(at));
            let timed_out = state.has_received_data
                && state.last_activity.is_some()
                && since_activity > self.inner.config.timeout;

            state.has_had_active_session
                && !session.is_active
                && (timed_out || since_activity > self.inner.config.quick_exit)
        };

        if fire {
            sr_log::warn!(
                "end of session '{}' detected, running teardown",
                session.session_id
            );
            self.run_teardown();
        }
    }

    fn run_teardown(&self) {
        {
            let callbacks = self.inner.callbacks.lock();
            for (i, callback) in callbacks.iter().enumerate() {
                if let Err(err) = callback() {
                    sr_log::error!("teardown callback #{i} failed: {err:#}");
                }
            }
        }

        // Full reset so the monitor can serve the next session.
        let mut state = self.inner.state.lock();
        state.last_activity = None;
        state.has_received_data = false;
        state.has_had_active_session = false;

        sr_log::info!("teardown complete, ready for a new session");
    }
}

// ---

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use crate::session::SessionRecord;

    use super::*;

    fn test_monitor() -> (ActivityMonitor, SessionRegistry, Arc<AtomicUsize>) {
        let sessions = SessionRegistry::new();
        let monitor = ActivityMonitor::new(MonitorConfig::DEFAULT, sessions.clone());
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let fired = Arc::clone(&fired);
            monitor.on_teardown(move || {
                fired.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }
        (monitor, sessions, fired)
    }

    #[tokio::test(start_paused = true)]
    async fn no_teardown_without_a_prior_live_session() {
        let (monitor, _sessions, fired) = test_monitor();

        tokio::time::advance(Duration::from_secs(60)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn active_session_is_never_torn_down() {
        let (monitor, sessions, fired) = test_monitor();
        sessions.update(SessionRecord::started_now("SLAM-1".to_owned()));
        monitor.update_activity();

        tokio::time::advance(Duration::from_secs(60)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn quick_exit_once_control_reports_inactive() {
        let (monitor, sessions, fired) = test_monitor();
        sessions.update(SessionRecord::started_now("SLAM-1".to_owned()));
        monitor.update_activity();
        monitor.tick(); // observes the live session

        sessions.set_active(false);
        tokio::time::advance(Duration::from_millis(1000)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 0, "not stale yet");

        tokio::time::advance(Duration::from_millis(1500)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1, "2s quick exit elapsed");
    }

    #[tokio::test(start_paused = true)]
    async fn inactive_session_with_no_data_at_all_tears_down() {
        let (monitor, sessions, fired) = test_monitor();
        sessions.update(SessionRecord::started_now("SLAM-1".to_owned()));
        monitor.tick();

        // Control flips inactive without a single data packet: an unset
        // activity time counts as stale.
        sessions.set_active(false);
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn monitor_resets_and_serves_sequential_sessions() {
        let (monitor, sessions, fired) = test_monitor();

        sessions.update(SessionRecord::started_now("SLAM-1".to_owned()));
        monitor.update_activity();
        monitor.tick();
        sessions.set_active(false);
        tokio::time::advance(Duration::from_secs(3)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // No re-fire while idle: the flags were reset.
        tokio::time::advance(Duration::from_secs(30)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // A second session goes through the same lifecycle.
        sessions.update(SessionRecord::started_now("SLAM-2".to_owned()));
        monitor.update_activity();
        monitor.tick();
        sessions.set_active(false);
        tokio::time::advance(Duration::from_secs(3)).await;
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_callback_does_not_block_the_rest() {
        let sessions = SessionRegistry::new();
        let monitor = ActivityMonitor::new(MonitorConfig::DEFAULT, sessions.clone());
        monitor.on_teardown(|| Err(anyhow::anyhow!("boom")));
        let fired = Arc::new(AtomicUsize::new(0));
        {
            let fired = Arc::clone(&fired);
            monitor.on_teardown(move || {
                fired.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }

        sessions.update(SessionRecord::started_now("SLAM-1".to_owned()));
        monitor.tick();
        sessions.set_active(false);
        monitor.tick();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
