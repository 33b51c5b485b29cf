// Matrix Tools Hub - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (with defaults when no file exists)
// 3. Logging initialisation (debug mode support)
// 4. Backend selection (simulated vs live HTTP)
// 5. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use matrix_hub::app;

pub use matrix_hub::core;
pub use matrix_hub::platform;
pub use matrix_hub::ui;
pub use matrix_hub::util;

use app::api::{HttpApi, RemoteApi, SimulatedApi};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Procedurally built window icon: a matrix-green "M" on the app's dark
/// background. Building it in code avoids shipping a binary asset.
fn build_icon() -> egui::IconData {
    const SIZE: usize = 64;
    const DARK: [u8; 4] = [1, 4, 9, 255];
    const GREEN: [u8; 4] = [0, 255, 65, 255];

    let mut rgba = vec![0u8; SIZE * SIZE * 4];
    for y in 0..SIZE {
        for x in 0..SIZE {
            // Two vertical stems plus the central V of an "M".
            let stem = (10..18).contains(&x) || (46..54).contains(&x);
            let in_band = (10..54).contains(&y);
            let diagonal = in_band && y >= 10 && {
                let drop = y - 10;
                let left = 18 + drop / 2;
                let right = 45 - drop / 2;
                (x >= left && x < left + 5 && x <= 31) || (x > 31 && x <= right && x + 5 > right)
            };
            let lit = in_band && (stem || diagonal);
            let pixel = if lit { GREEN } else { DARK };
            rgba[(y * SIZE + x) * 4..(y * SIZE + x) * 4 + 4].copy_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: SIZE as u32,
        height: SIZE as u32,
    }
}

/// Matrix Tools Hub - file conversion toolkit.
///
/// Three conversion tools behind one window: text to speech, images to
/// PDF, and PDF merging. Conversions run against configured HTTP
/// endpoints, or against a built-in simulated backend by default.
#[derive(Parser, Debug)]
#[command(name = "matrix-hub", version, about)]
struct Cli {
    /// Path to config.toml (platform config directory if omitted).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Call the configured HTTP endpoints instead of the simulated backend.
    #[arg(long = "live")]
    live: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve and load configuration before logging: the config may carry
    // the log level.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());

    let (mut config, config_warnings) = match platform::config::load_config(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Cannot load configuration");
            eprintln!("Error: cannot load configuration: {e}");
            std::process::exit(1);
        }
    };

    util::logging::init(cli.debug, config.logging.level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }

    if cli.live {
        config.dev.simulate_api_calls = false;
    }

    let enabled_tools: Vec<&str> = [
        (config.features.text_to_audio, "text-to-audio"),
        (config.features.image_to_pdf, "image-to-PDF"),
        (config.features.pdf_merge, "PDF merge"),
    ]
    .into_iter()
    .filter_map(|(enabled, name)| enabled.then_some(name))
    .collect();

    tracing::info!(
        config = %config_path.display(),
        simulated = config.dev.simulate_api_calls,
        tools = ?enabled_tools,
        max_file_size = %core::config::format_file_size(config.settings.upload.max_file_size),
        debug = cli.debug,
        "Matrix Tools Hub starting"
    );

    // Pick the backend. The placeholder scan runs inside AppState::new and
    // surfaces again as a header badge; an unconfigured endpoint in live
    // mode only fails when its tool is actually used.
    let api: Arc<dyn RemoteApi> = if config.dev.simulate_api_calls {
        Arc::new(SimulatedApi::new(config.dev.simulation_delay))
    } else {
        match HttpApi::new(config.api.clone()) {
            Ok(http) => Arc::new(http),
            Err(e) => {
                tracing::error!(error = %e, "Cannot build HTTP client");
                eprintln!("Error: cannot build HTTP client: {e}");
                std::process::exit(1);
            }
        }
    };

    let state = app::state::AppState::new(config, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(build_icon()),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, state.config.features.dark_mode);
            Ok(Box::new(gui::MatrixHubApp::new(state, api)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: failed to launch {}: {e}", util::constants::APP_NAME);
        std::process::exit(1);
    }
}
