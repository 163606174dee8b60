//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use samplepack::voice::{Classification, Recognizer, VoiceHandler};

/// A recognizer scripted from the test thread: utterances are fed through a
/// channel, and the blocking `next_utterance` call ends the stream when the
/// sender is dropped. Start/stop calls are counted so tests can observe the
/// session loop reaching its pause wait.
pub struct ScriptedRecognizer {
    rx: Receiver<String>,
    started: Arc<AtomicUsize>,
    stopped: Arc<AtomicUsize>,
}

impl ScriptedRecognizer {
    pub fn new() -> (Self, Sender<String>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let (tx, rx) = mpsc::channel();
        let started = Arc::new(AtomicUsize::new(0));
        let stopped = Arc::new(AtomicUsize::new(0));
        (
            Self {
                rx,
                started: Arc::clone(&started),
                stopped: Arc::clone(&stopped),
            },
            tx,
            started,
            stopped,
        )
    }
}

impl Recognizer for ScriptedRecognizer {
    fn start_listening(&mut self) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn stop_listening(&mut self) {
        self.stopped.fetch_add(1, Ordering::SeqCst);
    }

    fn next_utterance(&mut self) -> Option<String> {
        self.rx.recv().ok()
    }
}

/// Handler that records every classification it receives.
pub struct CollectingHandler {
    pub outcomes: Arc<Mutex<Vec<Classification>>>,
}

impl VoiceHandler for CollectingHandler {
    fn on_classified(&mut self, outcome: &Classification) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}

/// Poll `condition` until it holds or the timeout elapses.
pub fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}
