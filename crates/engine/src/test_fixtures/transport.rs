use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::SentFrame;
use crate::infrastructure::ports::{ConnectionTransport, TransportError};

/// In-memory transport that records what the room sends.
pub struct RecordingTransport {
    frames: Mutex<Vec<String>>,
    closes: Mutex<Vec<(u16, String)>>,
    send_error: Option<String>,
    stall_sends: bool,
    fail_close: AtomicBool,
    aborted: AtomicBool,
    open: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            frames: Mutex::new(Vec::new()),
            closes: Mutex::new(Vec::new()),
            send_error: None,
            stall_sends: false,
            fail_close: AtomicBool::new(false),
            aborted: AtomicBool::new(false),
            open: AtomicBool::new(true),
        }
    }

    /// Transport whose every write fails with `reason`.
    pub fn failing_sends(reason: &str) -> Self {
        Self {
            send_error: Some(reason.to_string()),
            ..Self::new()
        }
    }

    /// Transport whose writes never complete, like a peer that stopped reading.
    pub fn stalling_sends() -> Self {
        Self {
            stall_sends: true,
            ..Self::new()
        }
    }

    pub fn fail_close(&self) {
        self.fail_close.store(true, Ordering::SeqCst);
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::SeqCst);
    }

    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().expect("frames lock").clone()
    }

    pub fn sent(&self) -> Vec<SentFrame> {
        self.frames().iter().map(|f| SentFrame::parse(f)).collect()
    }

    pub fn clear(&self) {
        self.frames.lock().expect("frames lock").clear();
    }

    pub fn closes(&self) -> Vec<(u16, String)> {
        self.closes.lock().expect("closes lock").clone()
    }

    pub fn was_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionTransport for RecordingTransport {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn send_text(&self, text: &str) -> Result<(), TransportError> {
        if self.stall_sends {
            std::future::pending::<()>().await;
        }
        if let Some(reason) = &self.send_error {
            return Err(TransportError::Send(reason.clone()));
        }
        self.frames.lock().expect("frames lock").push(text.to_string());
        Ok(())
    }

    async fn close(&self, code: u16, reason: &str) -> Result<(), TransportError> {
        self.closes
            .lock()
            .expect("closes lock")
            .push((code, reason.to_string()));
        if self.fail_close.load(Ordering::SeqCst) {
            return Err(TransportError::Close("close frame rejected".to_string()));
        }
        self.set_open(false);
        Ok(())
    }

    async fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        self.set_open(false);
    }
}
