// Matrix Tools Hub - app/job.rs
//
// Background execution of conversion calls. One worker thread per
// submission; completion events flow back over an mpsc channel polled by
// the UI thread each frame.
//
// There is deliberately no cancellation and no per-tool mutual exclusion:
// overlapping submissions for the same tool are allowed, and the last
// event to arrive determines the visible state (see DESIGN.md).

use crate::app::api::RemoteApi;
use crate::core::model::{ToolKind, ToolRequest, ToolResponse};
use crate::util::error::ApiError;
use std::sync::mpsc;
use std::sync::Arc;

/// Completion of one background conversion call.
#[derive(Debug)]
pub struct JobEvent {
    pub tool: ToolKind,
    pub outcome: Result<ToolResponse, ApiError>,
}

/// Owns the channel between worker threads and the UI thread.
pub struct JobRunner {
    tx: mpsc::Sender<JobEvent>,
    rx: mpsc::Receiver<JobEvent>,
}

impl JobRunner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Launch `request` on a fresh worker thread.
    pub fn submit(&self, api: Arc<dyn RemoteApi>, request: ToolRequest) {
        let tool = request.tool();
        let tx = self.tx.clone();

        tracing::info!(tool = tool.label(), "Conversion submitted");
        std::thread::spawn(move || {
            let outcome = api.call(&request);
            match &outcome {
                Ok(response) => {
                    tracing::info!(tool = tool.label(), message = %response.message, "Conversion finished");
                }
                Err(e) => {
                    tracing::warn!(tool = tool.label(), error = %e, "Conversion failed");
                }
            }
            // Receiver dropped means the app is shutting down; nothing to do.
            let _ = tx.send(JobEvent { tool, outcome });
        });
    }

    /// Drain up to `max` pending completion events without blocking.
    pub fn poll(&self, max: usize) -> Vec<JobEvent> {
        let mut events = Vec::new();
        while events.len() < max {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
        events
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::api::SimulatedApi;
    use crate::core::config::SimulationDelays;
    use crate::core::model::TextToAudioRequest;
    use std::time::{Duration, Instant};

    fn wait_for_event(runner: &JobRunner) -> JobEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(event) = runner.poll(8).into_iter().next() {
                return event;
            }
            assert!(Instant::now() < deadline, "no job event within deadline");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_submit_delivers_completion_event() {
        let runner = JobRunner::new();
        let api = Arc::new(SimulatedApi::new(SimulationDelays::instant()));
        runner.submit(
            api,
            ToolRequest::TextToAudio(TextToAudioRequest {
                text: "hello".to_string(),
                voice: "neural".to_string(),
                speed: 1.0,
                format: "mp3".to_string(),
            }),
        );

        let event = wait_for_event(&runner);
        assert_eq!(event.tool, ToolKind::TextToAudio);
        assert!(event.outcome.is_ok());
    }

    #[test]
    fn test_poll_without_jobs_is_empty() {
        let runner = JobRunner::new();
        assert!(runner.poll(8).is_empty());
    }
}
