//! Live-activity / lock-screen collaborator for the rest timer.

use std::io::Write;

use thiserror::Error;

use crate::rest_timer::RestTimerEvent;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives rest-timer events. The session logs and drops failures; a
/// notifier can never change session state.
pub trait RestTimerNotifier {
    fn notify(&mut self, event: &RestTimerEvent) -> Result<(), NotifyError>;
}

#[derive(Debug, Default)]
pub struct NoopNotifier;

impl RestTimerNotifier for NoopNotifier {
    fn notify(&mut self, _event: &RestTimerEvent) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Writes each event as one JSON object per line, for hosts that bridge to a
/// platform notification process.
pub struct JsonLinesNotifier<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RestTimerNotifier for JsonLinesNotifier<W> {
    fn notify(&mut self, event: &RestTimerEvent) -> Result<(), NotifyError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lines_output() {
        let mut notifier = JsonLinesNotifier::new(Vec::new());
        notifier
            .notify(&RestTimerEvent::Started {
                exercise_name: "Squat".to_string(),
                set_label: "Set 1 · Warmup".to_string(),
                total_duration_seconds: 60,
            })
            .unwrap();
        notifier.notify(&RestTimerEvent::Ended).unwrap();

        let output = String::from_utf8(notifier.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "started");
        assert_eq!(lines[0]["exerciseName"], "Squat");
        assert_eq!(lines[0]["totalDurationSeconds"], 60);
        assert_eq!(lines[1], serde_json::json!({"event": "ended"}));
    }

    #[test]
    fn test_noop_accepts_everything() {
        let mut notifier = NoopNotifier;
        assert!(notifier.notify(&RestTimerEvent::Finished).is_ok());
    }
}
