use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::driver::LiveStepDriver;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::pacer::{Pacer, ThreadSleepPacer};
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::controllers::interactive::shared::{Session, SharedState, lock};
use crate::controllers::run_controller::{RunController, RunToken};
use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::run_algorithm::run_algorithm;
use crate::core::algorithms::kinds::AlgorithmKind;
use crate::core::config::session_config::{MIN_ARRAY_SIZE, SessionConfig, check_array_size};
use crate::core::config::speed::SpeedPreset;
use crate::core::config::visual_mode::VisualMode;
use crate::core::data::custom_input::split_custom_text;
use crate::core::data::element::Element;
use crate::core::data::sort_array::{SortArray, SortArrayError};
use crate::core::metrics::tracker::{MetricsSnapshot, MetricsTracker};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct ControllerOptions {
    pub config: SessionConfig,
    /// Fixed seed for array generation; entropy when absent.
    pub seed: Option<u64>,
    pub pacer: Arc<dyn Pacer>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            seed: None,
            pacer: Arc::new(ThreadSleepPacer),
        }
    }
}

/// Owns one visualization session: the array, its metrics, the run
/// controller and a worker thread that executes runs.
pub struct SortingController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl SortingController {
    pub fn new(
        presenter_port: Arc<dyn SortPresenterPort>,
        options: ControllerOptions,
    ) -> Result<Self, ControllerError> {
        let ControllerOptions {
            config,
            seed,
            pacer,
        } = options;
        config.validate()?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let array = SortArray::generate(config.array_size, &mut rng)?;

        let shared = Arc::new(SharedState {
            runs: RunController::new(),
            session: Mutex::new(Session {
                array,
                metrics: MetricsTracker::new(config.algorithm),
                config,
                rng,
            }),
            pending_run: Mutex::new(None),
            wake: Condvar::new(),
            last_settled: Mutex::new(0),
            settled: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
            present_order: Mutex::new(()),
            pacer,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Replaces the array with `size` random values and resets metrics.
    pub fn generate(&self, size: usize) -> Result<(), ControllerError> {
        let mut session = self.shared.session();
        self.ensure_idle()?;

        if size < MIN_ARRAY_SIZE {
            return Err(SortArrayError::InvalidSize { size }.into());
        }
        check_array_size(size)?;

        let array = SortArray::generate(size, &mut session.rng)?;
        session.array = array;
        session.config.array_size = size;
        session.metrics.reset();
        debug!(size, "array generated");

        self.publish_idle(session);
        Ok(())
    }

    /// Regenerates at the configured size.
    pub fn regenerate(&self) -> Result<(), ControllerError> {
        let size = self.shared.session().config.array_size;
        self.generate(size)
    }

    pub fn set_array_size(&self, size: usize) -> Result<(), ControllerError> {
        self.generate(size)
    }

    /// Replaces the array with user values. On failure the current array and
    /// metrics are left untouched.
    pub fn set_custom<S: AsRef<str>>(&self, items: &[S]) -> Result<(), ControllerError> {
        let mut session = self.shared.session();
        self.ensure_idle()?;

        let array = SortArray::from_custom(items)?;
        check_array_size(array.len())?;
        session.config.array_size = array.len();
        session.array = array;
        session.metrics.reset();
        debug!(size = session.array.len(), "custom array set");

        self.publish_idle(session);
        Ok(())
    }

    /// Comma separated form of [`Self::set_custom`].
    pub fn set_custom_text(&self, text: &str) -> Result<(), ControllerError> {
        self.set_custom(&split_custom_text(text))
    }

    pub fn start(&self) -> Result<RunToken, ControllerError> {
        let mut session = self.shared.session();
        let token = self.shared.runs.start()?;
        session.metrics.start(Instant::now());
        drop(session);

        *lock(&self.shared.pending_run) = Some(token);
        self.shared.wake.notify_one();

        debug!(%token, "sorting run requested");
        Ok(token)
    }

    /// Stops the live run and keeps the array as it was at its last frame.
    /// Returns false when nothing was running.
    pub fn pause(&self) -> bool {
        let mut session = self.shared.session();
        let paused = self.shared.runs.pause();
        if paused {
            session.metrics.finish(Instant::now());
            debug!(token = %self.shared.runs.current_token(), "sorting run paused");
        }
        paused
    }

    /// Invalidates any run and regenerates the array at the current size.
    pub fn reset(&self) -> Result<RunToken, ControllerError> {
        let session = self.shared.session();
        self.reset_locked(session)
    }

    fn reset_locked(
        &self,
        mut session: MutexGuard<'_, Session>,
    ) -> Result<RunToken, ControllerError> {
        let token = self.shared.runs.reset();

        let size = session.config.array_size;
        let array = SortArray::generate(size, &mut session.rng)?;
        session.array = array;
        session.metrics.reset();
        debug!(%token, size, "visualization reset");

        self.publish_idle(session);
        Ok(token)
    }

    /// Switches algorithm and resets the visualization. Rejected while a run
    /// is live.
    pub fn select_algorithm(&self, kind: AlgorithmKind) -> Result<RunToken, ControllerError> {
        let mut session = self.shared.session();
        self.ensure_idle()?;

        session.config.algorithm = kind;
        session.metrics.set_algorithm(kind);
        debug!(algorithm = %kind, "algorithm selected");

        self.reset_locked(session)
    }

    pub fn select_visual_mode(&self, mode: VisualMode) {
        let mut session = self.shared.session();
        session.config.visual_mode = mode;
        self.publish_idle(session);
    }

    /// Applies from the next suspension of a live run.
    pub fn set_speed(&self, speed: SpeedPreset) {
        self.shared.session().config.speed = speed;
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.shared.session().config.sound_enabled = enabled;
    }

    #[must_use]
    pub fn array(&self) -> SortArray {
        self.shared.session().array.clone()
    }

    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        self.shared.session().array.elements().to_vec()
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.shared.session().metrics.snapshot(Instant::now())
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.shared.session().config
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.runs.is_running()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.shared.runs.is_paused()
    }

    #[must_use]
    pub fn current_token(&self) -> RunToken {
        self.shared.runs.current_token()
    }

    /// Blocks until the run holding `token` has finished or aborted. Returns
    /// false on timeout.
    pub fn wait_until_settled(&self, token: RunToken, timeout: Duration) -> bool {
        let guard = lock(&self.shared.last_settled);
        let (guard, _) = self
            .shared
            .settled
            .wait_timeout_while(guard, timeout, |last| *last < token.get())
            .unwrap_or_else(PoisonError::into_inner);
        *guard >= token.get()
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn ensure_idle(&self) -> Result<(), ControllerError> {
        if self.shared.runs.is_running() {
            Err(ControllerError::AlreadyRunning)
        } else {
            Ok(())
        }
    }

    /// Presents the session state as of `session`, ahead of any frame a live
    /// run publishes afterwards.
    fn publish_idle(&self, session: MutexGuard<'_, Session>) {
        let frame = FrameData {
            token: self.shared.runs.current_token(),
            elements: session.array.elements().to_vec(),
            visual_mode: session.config.visual_mode,
        };
        let snapshot = session.metrics.snapshot(Instant::now());

        self.shared.present_after(
            session,
            [SortEvent::Frame(frame), SortEvent::Metrics(snapshot)],
        );
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let token = {
                let mut guard = lock(&shared.pending_run);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(token) = guard.take() {
                        break token;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            Self::execute_run(shared, token);
            shared.mark_settled(token);
        }
    }

    fn execute_run(shared: &SharedState, token: RunToken) {
        let (kind, mut array, metrics) = {
            let session = shared.session();
            (
                session.config.algorithm,
                session.array.clone(),
                session.metrics.clone(),
            )
        };
        debug!(%token, algorithm = %kind, size = array.len(), "sorting run started");

        let mut driver = LiveStepDriver::new(shared, token, metrics);
        match run_algorithm(kind, &mut array, &mut driver) {
            Ok(()) => {
                let mut session = shared.session();
                if shared.runs.finish(token) {
                    let now = Instant::now();
                    session.metrics = driver.into_metrics();
                    session.metrics.finish(now);
                    let snapshot = session.metrics.snapshot(now);
                    debug!(
                        %token,
                        comparisons = snapshot.comparisons,
                        exchanges = snapshot.exchanges,
                        "sorting run finished"
                    );

                    shared.present_after(
                        session,
                        [
                            SortEvent::Metrics(snapshot),
                            SortEvent::RunFinished { token },
                        ],
                    );
                } else {
                    drop(session);
                    debug!(%token, "sorting run superseded at completion");
                }
            }
            Err(Cancelled) => {
                debug!(%token, "sorting run cancelled");
            }
        }
    }
}

impl Drop for SortingController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::errors::presenter::PresenterError;
    use crate::controllers::interactive::ports::pacer::NoDelayPacer;
    use crate::core::algorithms::kinds::ExchangeLabel;
    use crate::core::config::session_config::ConfigError;
    use crate::core::data::element::ElementState;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<SortEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<SortEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl SortPresenterPort for MockPresenterPort {
        fn present(&self, event: SortEvent) -> Result<(), PresenterError> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    struct FailingPresenterPort;

    impl SortPresenterPort for FailingPresenterPort {
        fn present(&self, _event: SortEvent) -> Result<(), PresenterError> {
            Err(PresenterError::NotReady("canvas not attached".to_owned()))
        }
    }

    #[derive(Default)]
    struct GateState {
        waits: u64,
        held: bool,
        released: bool,
        delays: Vec<Duration>,
    }

    /// Blocks the worker inside its `hold_at`-th wait until released.
    struct GatePacer {
        hold_at: u64,
        state: Mutex<GateState>,
        changed: Condvar,
    }

    impl GatePacer {
        fn hold_at(hold_at: u64) -> Self {
            Self {
                hold_at,
                state: Mutex::new(GateState::default()),
                changed: Condvar::new(),
            }
        }

        fn wait_until_held(&self, timeout: Duration) -> bool {
            let guard = self.state.lock().unwrap();
            let (guard, _) = self
                .changed
                .wait_timeout_while(guard, timeout, |s| !s.held)
                .unwrap();
            guard.held
        }

        fn release(&self) {
            self.state.lock().unwrap().released = true;
            self.changed.notify_all();
        }

        fn delays(&self) -> Vec<Duration> {
            self.state.lock().unwrap().delays.clone()
        }
    }

    impl Pacer for GatePacer {
        fn wait(&self, delay: Duration) {
            let mut state = self.state.lock().unwrap();
            state.waits += 1;
            state.delays.push(delay);
            if state.waits == self.hold_at {
                state.held = true;
                self.changed.notify_all();
                while !state.released {
                    state = self.changed.wait(state).unwrap();
                }
            }
        }
    }

    struct FixedDelayPacer(Duration);

    impl Pacer for FixedDelayPacer {
        fn wait(&self, _delay: Duration) {
            thread::sleep(self.0);
        }
    }

    /// Records whether each `Dots` frame presented from `caller` repeats the
    /// frame presented right before it. Those frames are slowed down so the
    /// worker has time to overtake them.
    struct OrderCheckingPresenter {
        caller: thread::ThreadId,
        frames: Mutex<u64>,
        last_values: Mutex<Vec<u32>>,
        caller_frames_in_order: Mutex<Vec<bool>>,
    }

    impl OrderCheckingPresenter {
        fn new() -> Self {
            Self {
                caller: thread::current().id(),
                frames: Mutex::new(0),
                last_values: Mutex::new(Vec::new()),
                caller_frames_in_order: Mutex::new(Vec::new()),
            }
        }

        fn frames(&self) -> u64 {
            *self.frames.lock().unwrap()
        }
    }

    impl SortPresenterPort for OrderCheckingPresenter {
        fn present(&self, event: SortEvent) -> Result<(), PresenterError> {
            let SortEvent::Frame(frame) = event else {
                return Ok(());
            };
            let from_caller = thread::current().id() == self.caller
                && frame.visual_mode == VisualMode::Dots;
            if from_caller {
                thread::sleep(Duration::from_millis(50));
            }

            let values: Vec<u32> = frame.elements.iter().map(|e| e.value).collect();
            let mut last = self.last_values.lock().unwrap();
            if from_caller {
                self.caller_frames_in_order
                    .lock()
                    .unwrap()
                    .push(values == *last);
            }
            *last = values;
            *self.frames.lock().unwrap() += 1;
            Ok(())
        }
    }

    const SETTLE: Duration = Duration::from_secs(10);

    fn create_controller(
        presenter_port: &Arc<MockPresenterPort>,
        pacer: Arc<dyn Pacer>,
        config: SessionConfig,
    ) -> SortingController {
        SortingController::new(
            Arc::clone(presenter_port) as Arc<dyn SortPresenterPort>,
            ControllerOptions {
                config,
                seed: Some(7),
                pacer,
            },
        )
        .unwrap()
    }

    fn quiet_config(array_size: usize, algorithm: AlgorithmKind) -> SessionConfig {
        SessionConfig {
            array_size,
            algorithm,
            sound_enabled: false,
            ..SessionConfig::default()
        }
    }

    fn sorted_values(array: &SortArray) -> Vec<u32> {
        let mut values = array.values();
        values.sort_unstable();
        values
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let result = SortingController::new(
            presenter_port as Arc<dyn SortPresenterPort>,
            ControllerOptions {
                config: quiet_config(0, AlgorithmKind::Bubble),
                ..ControllerOptions::default()
            },
        );

        assert!(matches!(
            result,
            Err(ControllerError::Config(ConfigError::ArraySizeOutOfRange { size: 0, .. }))
        ));
    }

    #[test]
    fn test_run_completes_sorted_and_reports_finish() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            quiet_config(24, AlgorithmKind::Quick),
        );
        let before = sorted_values(&controller.array());

        let token = controller.start().unwrap();
        assert!(controller.wait_until_settled(token, SETTLE));

        let array = controller.array();
        assert!(array.is_sorted());
        assert_eq!(sorted_values(&array), before);
        assert!(
            array
                .elements()
                .iter()
                .all(|e| e.state == ElementState::Sorted)
        );
        assert!(!controller.is_running());

        let events = presenter_port.take_events();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SortEvent::RunFinished { token: t } if *t == token))
        );
        assert!(!events.iter().any(|e| matches!(e, SortEvent::Tone { .. })));
        for event in &events {
            if let SortEvent::Frame(frame) = event {
                assert_eq!(frame.token, token);
            }
        }

        let metrics = controller.metrics();
        assert_eq!(metrics.progress, 1.0);
        assert!(metrics.comparisons > 0);

        controller.shutdown();
    }

    #[test]
    fn test_tones_follow_values_when_sound_enabled() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            SessionConfig {
                array_size: 3,
                ..SessionConfig::default()
            },
        );
        controller.set_custom(&["3", "1", "2"]).unwrap();
        presenter_port.take_events();

        let token = controller.start().unwrap();
        assert!(controller.wait_until_settled(token, SETTLE));

        let tones: Vec<f64> = presenter_port
            .take_events()
            .into_iter()
            .filter_map(|e| match e {
                SortEvent::Tone { frequency } => Some(frequency),
                _ => None,
            })
            .collect();

        for finale in [402.0, 404.0, 406.0] {
            assert!(tones.contains(&finale), "missing finale tone {finale}");
        }
        assert!(tones.iter().any(|&f| (201.0..=203.0).contains(&f)));

        controller.shutdown();
    }

    #[test]
    fn test_pause_freezes_array_and_restart_finishes() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let gate = Arc::new(GatePacer::hold_at(5));
        let mut controller = create_controller(
            &presenter_port,
            Arc::clone(&gate) as Arc<dyn Pacer>,
            quiet_config(30, AlgorithmKind::Bubble),
        );

        let token = controller.start().unwrap();
        assert!(gate.wait_until_held(SETTLE));

        assert!(controller.pause());
        assert!(!controller.pause());
        let frozen = controller.array();
        presenter_port.take_events();

        gate.release();
        assert!(controller.wait_until_settled(token, SETTLE));

        assert_eq!(controller.array(), frozen);
        assert!(controller.is_paused());
        assert!(!controller.is_running());
        assert!(
            !presenter_port
                .take_events()
                .iter()
                .any(|e| matches!(e, SortEvent::Frame(_) | SortEvent::RunFinished { .. }))
        );

        let next = controller.start().unwrap();
        assert!(next > token);
        assert!(controller.wait_until_settled(next, SETTLE));

        let finished = controller.array();
        assert!(finished.is_sorted());
        assert_eq!(sorted_values(&finished), sorted_values(&frozen));

        controller.shutdown();
    }

    #[test]
    fn test_reset_mid_run_keeps_size_and_stale_run_never_publishes() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let gate = Arc::new(GatePacer::hold_at(3));
        let mut controller = create_controller(
            &presenter_port,
            Arc::clone(&gate) as Arc<dyn Pacer>,
            quiet_config(40, AlgorithmKind::Merge),
        );

        let token = controller.start().unwrap();
        assert!(gate.wait_until_held(SETTLE));

        let after = controller.reset().unwrap();
        assert!(after > token);
        assert!(!controller.is_running());
        let regenerated = controller.array();
        assert_eq!(regenerated.len(), 40);
        presenter_port.take_events();

        gate.release();
        assert!(controller.wait_until_settled(token, SETTLE));

        assert_eq!(controller.array(), regenerated);
        assert_eq!(controller.metrics().comparisons, 0);
        assert!(
            !presenter_port
                .take_events()
                .iter()
                .any(|e| matches!(e, SortEvent::Frame(f) if f.token == token))
        );

        controller.shutdown();
    }

    #[test]
    fn test_mutating_operations_rejected_while_live() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let gate = Arc::new(GatePacer::hold_at(1));
        let mut controller = create_controller(
            &presenter_port,
            Arc::clone(&gate) as Arc<dyn Pacer>,
            quiet_config(10, AlgorithmKind::Selection),
        );

        let token = controller.start().unwrap();
        assert!(gate.wait_until_held(SETTLE));

        assert_eq!(controller.start(), Err(ControllerError::AlreadyRunning));
        assert_eq!(
            controller.select_algorithm(AlgorithmKind::Heap),
            Err(ControllerError::AlreadyRunning)
        );
        assert_eq!(controller.generate(20), Err(ControllerError::AlreadyRunning));
        assert_eq!(
            controller.set_custom(&["1", "2"]),
            Err(ControllerError::AlreadyRunning)
        );
        assert_eq!(controller.config().algorithm, AlgorithmKind::Selection);

        controller.set_speed(SpeedPreset::Lightning);
        controller.select_visual_mode(VisualMode::Dots);
        assert_eq!(controller.config().speed, SpeedPreset::Lightning);
        assert_eq!(controller.config().visual_mode, VisualMode::Dots);

        gate.release();
        assert!(controller.wait_until_settled(token, SETTLE));
        assert!(controller.array().is_sorted());

        controller.shutdown();
    }

    #[test]
    fn test_select_algorithm_resets_when_idle() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            quiet_config(16, AlgorithmKind::Bubble),
        );
        let before = controller.current_token();

        let token = controller.select_algorithm(AlgorithmKind::Insertion).unwrap();

        assert!(token > before);
        assert_eq!(controller.config().algorithm, AlgorithmKind::Insertion);
        assert_eq!(controller.array().len(), 16);
        let metrics = controller.metrics();
        assert_eq!(metrics.algorithm, AlgorithmKind::Insertion);
        assert_eq!(metrics.exchange_label, ExchangeLabel::Shifts);

        controller.shutdown();
    }

    #[test]
    fn test_set_custom_replaces_array_or_leaves_it_intact() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            quiet_config(12, AlgorithmKind::Bubble),
        );

        controller.set_custom(&["5", "3", "8", "1"]).unwrap();

        let array = controller.array();
        assert_eq!(array.values(), vec![5, 3, 8, 1]);
        assert!(
            array
                .elements()
                .iter()
                .all(|e| e.state == ElementState::Default)
        );
        assert_eq!(controller.config().array_size, 4);

        assert_eq!(
            controller.set_custom(&["abc"]),
            Err(ControllerError::Array(SortArrayError::EmptyOrInvalidInput))
        );
        assert_eq!(controller.array(), array);

        controller.set_custom_text(" 12abc, 400, -3 ,7").unwrap();
        assert_eq!(controller.array().values(), vec![12, 300, 7]);

        controller.shutdown();
    }

    #[test]
    fn test_generate_validates_size() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            quiet_config(5, AlgorithmKind::Bubble),
        );

        assert_eq!(
            controller.generate(0),
            Err(ControllerError::Array(SortArrayError::InvalidSize { size: 0 }))
        );
        assert!(matches!(
            controller.generate(1001),
            Err(ControllerError::Config(_))
        ));

        controller.set_array_size(64).unwrap();
        assert_eq!(controller.array().len(), 64);
        assert_eq!(controller.config().array_size, 64);
        assert!(
            presenter_port
                .take_events()
                .iter()
                .any(|e| matches!(e, SortEvent::Frame(f) if f.elements.len() == 64))
        );

        controller.shutdown();
    }

    #[test]
    fn test_presenter_failures_do_not_abort_run() {
        let mut controller = SortingController::new(
            Arc::new(FailingPresenterPort),
            ControllerOptions {
                config: SessionConfig {
                    array_size: 20,
                    algorithm: AlgorithmKind::Heap,
                    ..SessionConfig::default()
                },
                seed: Some(1),
                pacer: Arc::new(NoDelayPacer),
            },
        )
        .unwrap();

        let token = controller.start().unwrap();
        assert!(controller.wait_until_settled(token, SETTLE));
        assert!(controller.array().is_sorted());

        controller.shutdown();
    }

    #[test]
    fn test_wait_until_settled_times_out_without_run() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            quiet_config(5, AlgorithmKind::Bubble),
        );

        let token = controller.reset().unwrap();
        assert!(!controller.wait_until_settled(token, Duration::from_millis(50)));

        controller.shutdown();
    }

    #[test]
    fn test_set_custom_rejects_lists_over_the_size_limit() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(
            &presenter_port,
            Arc::new(NoDelayPacer),
            quiet_config(12, AlgorithmKind::Bubble),
        );
        let before = controller.array();
        let items: Vec<String> = (1..=1001).map(|v| (v % 300 + 1).to_string()).collect();

        assert!(matches!(
            controller.set_custom(&items),
            Err(ControllerError::Config(ConfigError::ArraySizeOutOfRange { size: 1001, .. }))
        ));
        assert_eq!(controller.array(), before);
        assert_eq!(controller.config().array_size, 12);
        assert!(controller.config().validate().is_ok());

        controller.reset().unwrap();
        assert_eq!(controller.array().len(), 12);

        controller.set_custom(&items[..1000]).unwrap();
        assert_eq!(controller.config().array_size, 1000);

        controller.shutdown();
    }

    #[test]
    fn test_visual_mode_frame_is_not_overtaken_by_live_frames() {
        let presenter_port = Arc::new(OrderCheckingPresenter::new());
        let mut controller = SortingController::new(
            Arc::clone(&presenter_port) as Arc<dyn SortPresenterPort>,
            ControllerOptions {
                config: quiet_config(300, AlgorithmKind::Bubble),
                seed: Some(3),
                pacer: Arc::new(FixedDelayPacer(Duration::from_millis(1))),
            },
        )
        .unwrap();

        let token = controller.start().unwrap();
        while presenter_port.frames() < 5 {
            thread::sleep(Duration::from_millis(1));
        }

        controller.select_visual_mode(VisualMode::Dots);
        assert!(controller.is_running());
        assert!(controller.pause());
        assert!(controller.wait_until_settled(token, SETTLE));

        let in_order = presenter_port.caller_frames_in_order.lock().unwrap().clone();
        assert_eq!(in_order, vec![true]);

        controller.shutdown();
    }

    #[test]
    fn test_sound_toggle_applies_mid_run() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let gate = Arc::new(GatePacer::hold_at(4));
        let mut controller = create_controller(
            &presenter_port,
            Arc::clone(&gate) as Arc<dyn Pacer>,
            SessionConfig {
                array_size: 5,
                algorithm: AlgorithmKind::Bubble,
                ..SessionConfig::default()
            },
        );
        controller.set_custom(&["5", "4", "3", "2", "1"]).unwrap();
        presenter_port.take_events();

        let token = controller.start().unwrap();
        assert!(gate.wait_until_held(SETTLE));
        assert!(
            presenter_port
                .take_events()
                .iter()
                .any(|e| matches!(e, SortEvent::Tone { .. }))
        );

        controller.set_sound_enabled(false);
        gate.release();
        assert!(controller.wait_until_settled(token, SETTLE));

        let events = presenter_port.take_events();
        assert!(
            events
                .iter()
                .any(|e| matches!(e, SortEvent::RunFinished { .. }))
        );
        assert!(!events.iter().any(|e| matches!(e, SortEvent::Tone { .. })));

        controller.shutdown();
    }

    #[test]
    fn test_speed_change_applies_from_next_suspension() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let gate = Arc::new(GatePacer::hold_at(2));
        let mut controller = create_controller(
            &presenter_port,
            Arc::clone(&gate) as Arc<dyn Pacer>,
            SessionConfig {
                speed: SpeedPreset::default(),
                ..quiet_config(20, AlgorithmKind::Selection)
            },
        );

        let token = controller.start().unwrap();
        assert!(gate.wait_until_held(SETTLE));

        controller.set_speed(SpeedPreset::Lightning);
        gate.release();
        assert!(controller.wait_until_settled(token, SETTLE));

        let delays = gate.delays();
        assert_eq!(delays[..2], [SpeedPreset::default().delay(); 2]);
        assert_eq!(delays[2], SpeedPreset::Lightning.delay());
        assert!(
            !delays[2..]
                .iter()
                .any(|&d| d == SpeedPreset::default().delay())
        );

        controller.shutdown();
    }
}
