#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use outcome::prelude::*;
use outcome::trace::traced;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|guard| guard.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut guard) = self.0.lock() {
            guard.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(run: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, run);
    (result, buffer.contents())
}

#[test]
fn test_traced_pipeline_logs_each_stage() {
    let (halved, logs) = capture(|| {
        vec!["6", "5"]
            .into_iter()
            .map(try_to(|s: &str| s.parse::<i32>(), |e| e.to_string()))
            .map(traced("parse"))
            .map(attempt(|n: i32| {
                if n % 2 == 0 {
                    success(n / 2)
                } else {
                    failure(format!("{} is odd", n))
                }
            }))
            .map(traced("halve"))
            .collect::<Vec<_>>()
    });

    assert_eq!(halved, vec![success(3), failure("5 is odd".to_string())]);
    assert!(logs.contains("stage succeeded"));
    assert!(logs.contains("stage failed"));
    assert!(logs.contains("5 is odd"));
}

#[test]
fn test_captured_parse_error_is_logged() {
    let (parsed, logs) = capture(|| {
        with("NaN", try_to(|s: &str| s.parse::<i32>(), |e| e.to_string())).traced("parse")
    });

    assert!(parsed.is_failure());
    assert!(logs.contains("capturing it as a failure"));
    assert!(logs.contains("invalid digit found in string"));
}
