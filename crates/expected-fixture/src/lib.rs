//! Test fixtures for expected.
//!
//! Instrumented payload types that count their own lifetimes or fail on
//! demand, plus helpers for capturing the tracing output of a block. This
//! crate is publicly accessible so every crate in the workspace can use it
//! from tests without cfg(test) restrictions.

use std::fmt;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

// ============================================================================
// PART 1: Lifetime accounting
// ============================================================================

#[derive(Debug, Default)]
struct Counters {
    created: AtomicUsize,
    clones: AtomicUsize,
    drops: AtomicUsize,
}

/// Shared counters for every [`Tracked`] payload handed out by one ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    counters: Arc<Counters>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so its clones and drops are counted here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.counters.created.fetch_add(1, Ordering::SeqCst);
        Tracked {
            value,
            counters: Arc::clone(&self.counters),
        }
    }

    pub fn created(&self) -> usize {
        self.counters.created.load(Ordering::SeqCst)
    }

    pub fn clones(&self) -> usize {
        self.counters.clones.load(Ordering::SeqCst)
    }

    pub fn drops(&self) -> usize {
        self.counters.drops.load(Ordering::SeqCst)
    }

    /// Instances currently alive.
    pub fn live(&self) -> usize {
        self.created() + self.clones() - self.drops()
    }
}

/// A payload that reports its clones and drops to a [`Ledger`].
pub struct Tracked<T> {
    value: T,
    counters: Arc<Counters>,
}

impl<T> Tracked<T> {
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counters.clones.fetch_add(1, Ordering::SeqCst);
        Self {
            value: self.value.clone(),
            counters: Arc::clone(&self.counters),
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counters.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

// ============================================================================
// PART 2: Fault injection
// ============================================================================

/// Decides when a [`Flaky`] payload fails.
///
/// The plan is a countdown shared by every payload built against it. A
/// disarmed plan never fails; an armed plan fails once, when the countdown
/// reaches zero, and then disarms itself.
#[derive(Debug, Clone)]
pub struct FaultPlan {
    countdown: Arc<AtomicIsize>,
}

impl FaultPlan {
    /// A disarmed plan.
    pub fn new() -> Self {
        Self {
            countdown: Arc::new(AtomicIsize::new(-1)),
        }
    }

    /// Lets `n` constructions succeed, then fails the next one.
    pub fn fail_after(&self, n: usize) {
        let n = isize::try_from(n).unwrap_or(isize::MAX);
        self.countdown.store(n, Ordering::SeqCst);
    }

    pub fn disarm(&self) {
        self.countdown.store(-1, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.countdown.load(Ordering::SeqCst) >= 0
    }

    /// Consumes one construction. Returns true if this one must fail.
    pub fn trip(&self) -> bool {
        let previous = self
            .countdown
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n >= 0).then_some(n - 1)
            });
        matches!(previous, Ok(0))
    }
}

impl Default for FaultPlan {
    fn default() -> Self {
        Self::new()
    }
}

/// The failure reported by [`Flaky::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub label: String,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "injected fault constructing {}", self.label)
    }
}

impl std::error::Error for Fault {}

/// A payload whose construction and cloning can be made to fail.
///
/// [`Flaky::build`] returns `Err` when the plan trips; `clone` panics.
#[derive(Debug)]
pub struct Flaky {
    label: String,
    plan: FaultPlan,
}

impl Flaky {
    /// Builds a payload without consulting the plan.
    pub fn new(label: impl Into<String>, plan: &FaultPlan) -> Self {
        Self {
            label: label.into(),
            plan: plan.clone(),
        }
    }

    /// Builds a payload, failing if the plan trips.
    pub fn build(label: impl Into<String>, plan: &FaultPlan) -> Result<Self, Fault> {
        let label = label.into();
        if plan.trip() {
            return Err(Fault { label });
        }
        Ok(Self::new(label, plan))
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Clone for Flaky {
    fn clone(&self) -> Self {
        if self.plan.trip() {
            panic!("injected panic cloning {}", self.label);
        }
        Self::new(self.label.clone(), &self.plan)
    }
}

impl PartialEq for Flaky {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

// ============================================================================
// PART 3: Callback recording
// ============================================================================

/// Records callback invocations in order.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: &str) {
        self.calls.lock().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}

// ============================================================================
// PART 4: Log capture
// ============================================================================

/// An in-memory sink for a fmt subscriber.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber that records every event down to
/// `TRACE`, and returns the formatted output alongside `f`'s result.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// Installs a global test subscriber filtered by `RUST_LOG`. Does nothing
/// when `RUST_LOG` is unset.
pub fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
