//! Shared test utilities for flow word tests

use std::io;
use std::sync::{Arc, Mutex};

use rand::Rng;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::layout::{MAX_AMOUNT, MAX_FLOW_RATE};

/// Random in-range fields: `(timestamp, flow_rate, deposit, owed_deposit)`
pub fn random_fields<R: Rng>(rng: &mut R) -> (u64, u128, u128, u128) {
    (
        rng.random::<u32>() as u64,
        rng.random_range(0..=MAX_FLOW_RATE),
        rng.random_range(0..=MAX_AMOUNT),
        rng.random_range(0..=MAX_AMOUNT),
    )
}

/// Assert a decoded tuple matches the expected fields, naming the first mismatch
pub fn assert_fields(actual: (u32, u128, u128, u128), expected: (u32, u128, u128, u128)) {
    assert_eq!(actual.0, expected.0, "timestamp mismatch");
    assert_eq!(actual.1, expected.1, "flow_rate mismatch");
    assert_eq!(actual.2, expected.2, "deposit mismatch");
    assert_eq!(actual.3, expected.3, "owed_deposit mismatch");
}

/// In-memory log sink shared between the subscriber and the test
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
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

/// Run `f` under a thread-local fmt subscriber and return what it logged at `level` and above
pub fn capture_logs<F: FnOnce()>(level: Level, f: F) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}
