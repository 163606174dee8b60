//! The background listening session.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::classify::{classify, Classification, WeightRange};

/// The external speech engine, reduced to the three calls the session needs.
///
/// Construction of a real engine is fallible and happens at the caller; a
/// failed initialization is fatal to voice input only.
pub trait Recognizer: Send {
    /// Begin capturing audio.
    fn start_listening(&mut self);

    /// Stop capturing audio.
    fn stop_listening(&mut self);

    /// Block until the engine yields the next utterance. `None` means the
    /// engine's stream has ended and the session loop should exit.
    fn next_utterance(&mut self) -> Option<String>;
}

/// Receives the classification of each utterance on the session thread.
/// The handler decides what to do with it: record a weight on the registry,
/// run a navigation query, or pause the session through its
/// [`VoiceControl`].
pub trait VoiceHandler: Send {
    fn on_classified(&mut self, outcome: &Classification);
}

#[derive(Debug)]
struct Latch {
    paused: bool,
    closed: bool,
}

struct Shared {
    latch: Mutex<Latch>,
    cond: Condvar,
}

/// Cloneable control surface for a running session: the pause/resume latch
/// and the close flag. Safe to use from any thread, including from inside
/// [`VoiceHandler::on_classified`].
#[derive(Clone)]
pub struct VoiceControl {
    shared: Arc<Shared>,
    refresh: Arc<dyn Fn() + Send + Sync>,
}

impl VoiceControl {
    /// Ask the loop thread to stop the recognizer and block until resumed.
    pub fn pause(&self) {
        self.shared.latch.lock().unwrap().paused = true;
        info!("voice session pause requested");
        (self.refresh)();
    }

    /// Clear the pause latch and wake the waiting loop thread, which
    /// restarts the recognizer.
    pub fn proceed(&self) {
        self.shared.latch.lock().unwrap().paused = false;
        self.shared.cond.notify_one();
        info!("voice session resume requested");
        (self.refresh)();
    }

    /// Ask the loop thread to exit. Observable promptly while paused; while
    /// blocked on the recognizer it takes effect at the next utterance
    /// boundary (cancellation is cooperative, the blocking call is opaque).
    pub fn close(&self) {
        self.shared.latch.lock().unwrap().closed = true;
        self.shared.cond.notify_all();
        info!("voice session close requested");
    }

    pub fn paused(&self) -> bool {
        self.shared.latch.lock().unwrap().paused
    }

    pub fn closed(&self) -> bool {
        self.shared.latch.lock().unwrap().closed
    }
}

/// One background listening loop over an external recognizer.
///
/// The session starts paused; call [`VoiceControl::proceed`] to begin
/// listening. Dropping the session signals close but does not wait for the
/// thread (it must never keep the process alive); [`VoiceSession::join`]
/// waits explicitly.
pub struct VoiceSession {
    control: VoiceControl,
    thread: Option<JoinHandle<()>>,
}

impl VoiceSession {
    /// Spawn the loop thread. `make_handler` receives the session's control
    /// handle so the handler can pause or close the session it serves;
    /// `refresh` is the UI-refresh hook, invoked at every iteration top and
    /// whenever the latch is flipped.
    pub fn spawn<R, H, F>(
        recognizer: R,
        range: WeightRange,
        refresh: impl Fn() + Send + Sync + 'static,
        make_handler: F,
    ) -> Result<Self>
    where
        R: Recognizer + 'static,
        H: VoiceHandler + 'static,
        F: FnOnce(VoiceControl) -> H,
    {
        let shared = Arc::new(Shared {
            latch: Mutex::new(Latch {
                paused: true,
                closed: false,
            }),
            cond: Condvar::new(),
        });
        let control = VoiceControl {
            shared,
            refresh: Arc::new(refresh),
        };
        let handler = make_handler(control.clone());

        let thread = thread::Builder::new()
            .name("voice-session".to_string())
            .spawn({
                let control = control.clone();
                move || run_loop(recognizer, range, control, handler)
            })
            .context("failed to spawn voice session thread")?;

        Ok(Self {
            control,
            thread: Some(thread),
        })
    }

    /// A cloneable handle to the pause/resume latch.
    pub fn control(&self) -> VoiceControl {
        self.control.clone()
    }

    pub fn pause(&self) {
        self.control.pause();
    }

    pub fn proceed(&self) {
        self.control.proceed();
    }

    pub fn close(&self) {
        self.control.close();
    }

    pub fn paused(&self) -> bool {
        self.control.paused()
    }

    /// Close and wait for the loop thread to exit. Blocks until the
    /// recognizer yields its current utterance if the thread is inside the
    /// blocking call.
    pub fn join(mut self) {
        self.control.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for VoiceSession {
    fn drop(&mut self) {
        self.control.close();
    }
}

fn run_loop<R: Recognizer>(
    mut recognizer: R,
    range: WeightRange,
    control: VoiceControl,
    mut handler: impl VoiceHandler,
) {
    debug!("voice session thread started");
    recognizer.start_listening();

    loop {
        (control.refresh)();
        {
            let mut latch = control.shared.latch.lock().unwrap();
            if latch.closed {
                break;
            }
            if latch.paused {
                recognizer.stop_listening();
                debug!("voice session paused");
                while latch.paused && !latch.closed {
                    latch = control.shared.cond.wait(latch).unwrap();
                }
                // A close issued while paused must not need a resume first.
                if latch.closed {
                    break;
                }
                recognizer.start_listening();
                debug!("voice session resumed");
            }
        }

        let Some(utterance) = recognizer.next_utterance() else {
            debug!("recognizer stream ended");
            break;
        };
        let outcome = classify(&utterance, range);
        debug!(utterance = %utterance, ?outcome, "utterance classified");
        handler.on_classified(&outcome);
    }

    recognizer.stop_listening();
    info!("voice session thread exited");
}
