//! Shared fixtures for curator-core integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use curator_core::error::CuratorError;
use curator_core::services::Notifier;
use curator_model::prelude::*;

/// Routes `tracing` output through the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn gallery(id: &str) -> SelectedGallery {
    SelectedGallery::new(GalleryID::new(id).expect("gallery id"))
}

pub fn performer(id: &str) -> PerformerID {
    PerformerID::new(id).expect("performer id")
}

pub fn tag(id: &str) -> TagID {
    TagID::new(id).expect("tag id")
}

pub fn studio(id: &str) -> StudioID {
    StudioID::new(id).expect("studio id")
}

/// Notifier that keeps every toast for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, error: &CuratorError) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

/// Close callback that records every `applied` flag it receives.
pub fn close_recorder() -> (Arc<Mutex<Vec<bool>>>, impl FnMut(bool) + Send + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    (calls, move |applied| sink.lock().unwrap().push(applied))
}
