//! Integration tests for the voice session state machine.

mod common;

use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use samplepack::shipment::{NavOptions, Shipment};
use samplepack::voice::{
    Classification, VoiceControl, VoiceHandler, VoiceSession, WeightRange, COMMAND_END,
    COMMAND_NEXT,
};

use common::{wait_until, CollectingHandler, ScriptedRecognizer};

const TIMEOUT: Duration = Duration::from_secs(2);

/// Join the session on a helper thread so a deadlock fails the test instead
/// of hanging it.
fn join_within(session: VoiceSession, timeout: Duration) -> bool {
    let (done_tx, done_rx) = mpsc::channel();
    thread::spawn(move || {
        session.join();
        let _ = done_tx.send(());
    });
    done_rx.recv_timeout(timeout).is_ok()
}

#[test]
fn test_session_starts_paused() {
    let (recognizer, tx, _started, stopped) = ScriptedRecognizer::new();
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let session = VoiceSession::spawn(recognizer, WeightRange::default(), || {}, |_control| {
        CollectingHandler {
            outcomes: Arc::clone(&outcomes),
        }
    })
    .expect("spawn should succeed");

    assert!(session.paused(), "a fresh session must start paused");
    // The loop parks without consuming anything from the recognizer.
    assert!(wait_until(TIMEOUT, || stopped.load(Ordering::SeqCst) == 1));
    assert!(outcomes.lock().unwrap().is_empty());

    drop(tx);
    assert!(join_within(session, TIMEOUT));
}

#[test]
fn test_close_while_paused_wakes_without_resume() {
    let (recognizer, tx, started, stopped) = ScriptedRecognizer::new();
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let session = VoiceSession::spawn(recognizer, WeightRange::default(), || {}, |_control| {
        CollectingHandler {
            outcomes: Arc::clone(&outcomes),
        }
    })
    .expect("spawn should succeed");

    // Wait for the loop thread to park in the pause wait.
    assert!(wait_until(TIMEOUT, || stopped.load(Ordering::SeqCst) == 1));

    session.close();
    assert!(
        join_within(session, TIMEOUT),
        "a close issued while paused must wake the loop thread"
    );
    // The recognizer was never restarted on the way out.
    assert_eq!(started.load(Ordering::SeqCst), 1);
    drop(tx);
}

#[test]
fn test_pause_proceed_close_without_deadlock() {
    let (recognizer, tx, started, stopped) = ScriptedRecognizer::new();
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let session = VoiceSession::spawn(recognizer, WeightRange::new(0.0, 1.5), || {}, |_control| {
        CollectingHandler {
            outcomes: Arc::clone(&outcomes),
        }
    })
    .expect("spawn should succeed");

    assert!(wait_until(TIMEOUT, || stopped.load(Ordering::SeqCst) == 1));

    session.proceed();
    assert!(!session.paused());
    assert!(wait_until(TIMEOUT, || started.load(Ordering::SeqCst) == 2));

    tx.send("0 8".to_string()).unwrap();
    assert!(wait_until(TIMEOUT, || outcomes.lock().unwrap().len() == 1));
    assert_eq!(
        outcomes.lock().unwrap()[0],
        Classification::Weight(0.8),
        "spoken digits must classify as a weight"
    );

    // Pause takes effect at the next iteration boundary; feed one more
    // utterance to push the loop past the blocking call.
    session.pause();
    tx.send("command_next".to_string()).unwrap();
    assert!(wait_until(TIMEOUT, || stopped.load(Ordering::SeqCst) == 2));

    // Queued proceed followed by close must still shut down cleanly.
    session.proceed();
    assert!(wait_until(TIMEOUT, || started.load(Ordering::SeqCst) == 3));
    assert!(wait_until(TIMEOUT, || outcomes.lock().unwrap().len() == 2));
    session.close();
    drop(tx);
    assert!(join_within(session, TIMEOUT));
}

#[test]
fn test_refresh_hook_fires_on_latch_changes() {
    let (recognizer, tx, _started, stopped) = ScriptedRecognizer::new();
    let refreshes = Arc::new(Mutex::new(0usize));
    let refreshes_hook = Arc::clone(&refreshes);
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let session = VoiceSession::spawn(
        recognizer,
        WeightRange::default(),
        move || *refreshes_hook.lock().unwrap() += 1,
        |_control| CollectingHandler {
            outcomes: Arc::clone(&outcomes),
        },
    )
    .expect("spawn should succeed");

    assert!(wait_until(TIMEOUT, || stopped.load(Ordering::SeqCst) == 1));
    let after_start = *refreshes.lock().unwrap();
    session.proceed();
    session.pause();
    assert!(*refreshes.lock().unwrap() >= after_start + 2);

    session.close();
    drop(tx);
    assert!(join_within(session, TIMEOUT));
}

/// The handler the GUI would supply: weights land in the registry, commands
/// drive the navigation cursor, the end command pauses the session.
struct PackingHandler {
    control: VoiceControl,
    registry: Arc<Mutex<Shipment>>,
    cursor: Arc<Mutex<Option<usize>>>,
}

impl VoiceHandler for PackingHandler {
    fn on_classified(&mut self, outcome: &Classification) {
        match outcome {
            Classification::Weight(value) => {
                let mut registry = self.registry.lock().unwrap();
                let mut cursor = self.cursor.lock().unwrap();
                if let Some(index) = *cursor {
                    registry.set_weight(index, value.to_string());
                    if !registry.get(index).map(|s| s.packed()).unwrap_or(true) {
                        registry.revert_packed_status(index);
                    }
                    *cursor = registry.next_index(Some(index), NavOptions::DEFAULT);
                }
            }
            Classification::Phrase(phrase) if phrase == COMMAND_NEXT => {
                let registry = self.registry.lock().unwrap();
                let mut cursor = self.cursor.lock().unwrap();
                *cursor = registry.next_index(*cursor, NavOptions::DEFAULT.every_item());
            }
            Classification::Phrase(phrase) if phrase == COMMAND_END => {
                self.control.pause();
            }
            _ => {}
        }
    }
}

#[test]
fn test_weight_flows_into_registry_and_advances_cursor() {
    let registry = Arc::new(Mutex::new(Shipment::default()));
    {
        let mut registry = registry.lock().unwrap();
        for code in ["A", "B", "C"] {
            registry.add_sample(samplepack::Sample::new(code, "s", "r", "b", "1", "1"));
        }
    }
    let cursor = Arc::new(Mutex::new(Some(0)));

    let (recognizer, tx, _started, stopped) = ScriptedRecognizer::new();
    let session = VoiceSession::spawn(recognizer, WeightRange::new(0.0, 1.5), || {}, {
        let registry = Arc::clone(&registry);
        let cursor = Arc::clone(&cursor);
        |control| PackingHandler {
            control,
            registry,
            cursor,
        }
    })
    .expect("spawn should succeed");

    session.proceed();
    tx.send("0 8".to_string()).unwrap();

    assert!(wait_until(TIMEOUT, || {
        registry.lock().unwrap().get(0).map(|s| s.packed()) == Some(true)
    }));
    {
        let registry = registry.lock().unwrap();
        assert_eq!(registry.get(0).unwrap().weight(), "0.8");
        assert_eq!(registry.cell(0, 0), Some("A 0.8"));
    }
    assert_eq!(*cursor.lock().unwrap(), Some(1));

    // The end command pauses the session from inside the handler.
    tx.send(COMMAND_END.to_string()).unwrap();
    assert!(wait_until(TIMEOUT, || stopped.load(Ordering::SeqCst) == 2));
    assert!(session.paused());

    session.close();
    drop(tx);
    assert!(join_within(session, TIMEOUT));
}
