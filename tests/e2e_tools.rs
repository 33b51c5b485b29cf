// Matrix Tools Hub - tests/e2e_tools.rs
//
// End-to-end tests for the three conversion tools.
//
// These tests exercise the real state layer, the real background job
// runner with worker threads, the real simulated backend, and real
// files on disk for upload and download. No rendering environment is
// needed; the GUI shell is a thin wrapper over the same calls.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use matrix_hub::app::api::{HttpApi, RemoteApi, SimulatedApi};
use matrix_hub::app::download;
use matrix_hub::app::job::{JobEvent, JobRunner};
use matrix_hub::app::state::{AppState, ToolStatus};
use matrix_hub::core::config::{HubConfig, SimulationDelays};
use matrix_hub::core::mime;
use matrix_hub::core::model::{ResourceLocator, ToolKind};

// =============================================================================
// Helpers
// =============================================================================

/// Default configuration with zero simulated delays so flows finish fast.
fn instant_config() -> HubConfig {
    let mut config = HubConfig::default();
    config.dev.simulation_delay = SimulationDelays::instant();
    config
}

fn simulated_api(config: &HubConfig) -> Arc<dyn RemoteApi> {
    Arc::new(SimulatedApi::new(config.dev.simulation_delay))
}

/// Block until the runner delivers one completion event.
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

/// Create a file with the given name and content inside `dir`, then load it
/// the way the file pickers do.
fn disk_file(
    dir: &tempfile::TempDir,
    name: &str,
    content: &[u8],
) -> matrix_hub::core::model::SelectedFile {
    let path: PathBuf = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    mime::selected_file_from_path(&path).unwrap()
}

// =============================================================================
// Text to audio
// =============================================================================

/// Full flow: type text, submit, wait for the simulated backend, download
/// the result to disk and check it is a playable WAV.
#[test]
fn e2e_text_to_audio_produces_downloadable_audio() {
    let config = instant_config();
    let api = simulated_api(&config);
    let runner = JobRunner::new();
    let mut state = AppState::new(config, false);

    state.tts.text = "There is no spoon.".to_string();
    let request = state.try_submit_text_to_audio().expect("submit accepted");
    assert!(state.tts.status.is_loading());

    runner.submit(api, request);
    let event = wait_for_event(&runner);
    assert_eq!(event.tool, ToolKind::TextToAudio);
    state.apply_job_event(event);

    let ToolStatus::Ready(response) = &state.tts.status else {
        panic!("expected Ready, got {:?}", state.tts.status);
    };
    assert_eq!(response.suggested_name, "generated-audio.mp3");

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join(&response.suggested_name);
    download::save_resource(&response.resource, &dest).unwrap();

    let saved = std::fs::read(&dest).unwrap();
    assert!(saved.starts_with(b"RIFF"));
    assert_eq!(&saved[8..12], b"WAVE");

    let banner = state.notifications.iter().next().unwrap();
    assert_eq!(banner.message, "Audio generated successfully!");
}

// =============================================================================
// Image to PDF
// =============================================================================

/// Full flow with real image files on disk: select, submit, wait, and
/// download the produced PDF.
#[test]
fn e2e_image_to_pdf_converts_selected_files() {
    let config = instant_config();
    let api = simulated_api(&config);
    let runner = JobRunner::new();
    let mut state = AppState::new(config, false);

    let dir = tempfile::tempdir().unwrap();
    state.add_image_files(vec![
        disk_file(&dir, "one.png", b"\x89PNG\r\n\x1a\nfake"),
        disk_file(&dir, "two.jpg", b"\xff\xd8\xfffake"),
    ]);
    assert_eq!(state.image.files.len(), 2);
    assert!(state.notifications.is_empty(), "no rejections expected");

    let request = state.try_submit_image_to_pdf().expect("submit accepted");
    runner.submit(api, request);
    state.apply_job_event(wait_for_event(&runner));

    let ToolStatus::Ready(response) = &state.image.status else {
        panic!("expected Ready, got {:?}", state.image.status);
    };
    assert_eq!(response.suggested_name, "converted-images.pdf");

    let dest = dir.path().join(&response.suggested_name);
    download::save_resource(&response.resource, &dest).unwrap();
    assert!(std::fs::read(&dest).unwrap().starts_with(b"%PDF-"));

    // Selected files stay in the list for a repeat conversion.
    assert_eq!(state.image.files.len(), 2);
}

// =============================================================================
// PDF merge
// =============================================================================

/// Full flow with a custom output filename.
#[test]
fn e2e_pdf_merge_uses_requested_filename() {
    let config = instant_config();
    let api = simulated_api(&config);
    let runner = JobRunner::new();
    let mut state = AppState::new(config, false);

    let dir = tempfile::tempdir().unwrap();
    state.add_pdf_files(vec![
        disk_file(&dir, "a.pdf", b"%PDF-1.4 fake a"),
        disk_file(&dir, "b.pdf", b"%PDF-1.4 fake b"),
    ]);
    state.merge.filename = "dossier.pdf".to_string();

    let request = state.try_submit_pdf_merge().expect("submit accepted");
    runner.submit(api, request);
    state.apply_job_event(wait_for_event(&runner));

    let ToolStatus::Ready(response) = &state.merge.status else {
        panic!("expected Ready, got {:?}", state.merge.status);
    };
    assert_eq!(response.suggested_name, "dossier.pdf");

    let banner = state.notifications.iter().next().unwrap();
    assert_eq!(banner.message, "PDFs merged successfully!");
}

/// Overlapping submissions for the same tool are permitted: both calls
/// complete and deliver, and the last event applied determines the
/// visible state.
#[test]
fn e2e_overlapping_merge_submissions_last_event_wins() {
    let config = instant_config();
    let api = simulated_api(&config);
    let runner = JobRunner::new();
    let mut state = AppState::new(config, false);

    let dir = tempfile::tempdir().unwrap();
    state.add_pdf_files(vec![
        disk_file(&dir, "a.pdf", b"%PDF-1.4 fake a"),
        disk_file(&dir, "b.pdf", b"%PDF-1.4 fake b"),
    ]);

    state.merge.filename = "first.pdf".to_string();
    let earlier = state.try_submit_pdf_merge().expect("submit accepted");
    state.merge.filename = "second.pdf".to_string();
    let later = state
        .try_submit_pdf_merge()
        .expect("resubmission accepted while loading");

    runner.submit(api.clone(), earlier);
    runner.submit(api, later);

    let first_event = wait_for_event(&runner);
    let second_event = wait_for_event(&runner);

    let name = |event: &JobEvent| match &event.outcome {
        Ok(response) => response.suggested_name.clone(),
        Err(e) => panic!("unexpected failure: {e}"),
    };
    let mut delivered = vec![name(&first_event), name(&second_event)];
    delivered.sort();
    assert_eq!(delivered, vec!["first.pdf", "second.pdf"]);

    let last_applied = name(&second_event);
    state.apply_job_event(first_event);
    state.apply_job_event(second_event);

    let ToolStatus::Ready(response) = &state.merge.status else {
        panic!("expected Ready, got {:?}", state.merge.status);
    };
    assert_eq!(response.suggested_name, last_applied);
    assert_eq!(state.notifications.len(), 2);
}

// =============================================================================
// Upload limits and live-mode failures
// =============================================================================

/// An oversized file never reaches the backend and raises the configured
/// error copy.
#[test]
fn e2e_oversized_file_is_rejected_before_submission() {
    let mut config = instant_config();
    config.settings.upload.max_file_size = 8;
    let mut state = AppState::new(config, false);

    let dir = tempfile::tempdir().unwrap();
    state.add_image_files(vec![disk_file(
        &dir,
        "huge.png",
        b"\x89PNG\r\n\x1a\n more than eight bytes",
    )]);

    assert!(state.image.files.is_empty());
    assert!(state.try_submit_image_to_pdf().is_none());
    let banner = state.notifications.iter().next().unwrap();
    assert!(banner.message.starts_with("File is too large"));
    assert!(banner.message.contains("huge.png"));
}

/// In live mode with placeholder endpoints the call fails fast and the
/// panel returns to idle with an error banner.
#[test]
fn e2e_unconfigured_live_backend_reports_error() {
    let config = instant_config();
    let api: Arc<dyn RemoteApi> = Arc::new(HttpApi::new(config.api.clone()).unwrap());
    let runner = JobRunner::new();
    let mut state = AppState::new(config, false);

    assert!(!state.api_report.is_fully_configured());

    state.tts.text = "ignored".to_string();
    let request = state.try_submit_text_to_audio().expect("submit accepted");
    runner.submit(api, request);

    let event = wait_for_event(&runner);
    assert!(event.outcome.is_err());
    state.apply_job_event(event);

    assert!(matches!(state.tts.status, ToolStatus::Idle));
    let banner = state.notifications.iter().next().unwrap();
    assert!(banner.message.starts_with("Error: "));
    assert!(banner.message.contains("text-to-audio"));
}

/// A URL resource that cannot be fetched surfaces as a download error and
/// writes nothing to disk.
#[test]
fn e2e_failed_url_download_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.mp3");
    let resource = ResourceLocator::Url("http://127.0.0.1:9/unreachable".to_string());

    let err = download::save_resource(&resource, &dest).unwrap_err();
    assert!(matches!(
        err,
        matrix_hub::util::error::ResourceError::Download { .. }
    ));
    assert!(!dest.exists());
}
