// MMDVM Monitor - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading, then logging initialisation
// 3. Frequency lookup and log source setup
// 4. eframe GUI launch, or the headless JSON-lines scheduler

mod gui;

pub use mmdvm_monitor::app;
pub use mmdvm_monitor::core;
pub use mmdvm_monitor::platform;
pub use mmdvm_monitor::ui;
pub use mmdvm_monitor::util;

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// MMDVM Monitor - live repeater activity display for Pi-Star.
///
/// Follows the daily MMDVMHost log and shows who is transmitting, on which
/// mode, to which talkgroup, reflector, or room.
#[derive(Parser, Debug)]
#[command(name = "mmdvm-monitor", version, about)]
struct Cli {
    /// Directory holding the daily MMDVM-YYYY-MM-DD.log files.
    #[arg(short = 'l', long = "log-dir")]
    log_dir: Option<PathBuf>,

    /// MMDVMHost configuration file (for RX/TX frequencies).
    #[arg(short = 'm', long = "mmdvmhost")]
    mmdvmhost: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Run without a window and print each newly heard station as JSON.
    #[arg(long = "headless")]
    headless: bool,

    /// Start the window fullscreen.
    #[arg(short = 'f', long = "fullscreen")]
    fullscreen: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (mut config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "MMDVM Monitor starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // CLI overrides config.toml.
    if let Some(dir) = cli.log_dir {
        config.log_dir = dir;
    }
    if let Some(file) = cli.mmdvmhost {
        config.mmdvmhost_file = file;
    }
    if cli.fullscreen {
        config.fullscreen = true;
    }

    let frequencies = platform::mmdvmhost::frequency_display(&config.mmdvmhost_file);
    let source = app::tail::LineSource::new(config.log_dir.clone());
    let monitor = app::monitor::Monitor::new(
        source,
        config.idle_timeout(),
        frequencies,
        Instant::now(),
    );

    if cli.headless {
        run_headless(monitor, &config);
        return;
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1024.0, 600.0])
            .with_min_inner_size([800.0, 480.0])
            .with_fullscreen(config.fullscreen),
        ..Default::default()
    };

    let debug = cli.debug;
    let tick_interval = config.tick_interval();
    let scroll_interval = config.scroll_interval();
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(gui::MonitorApp::new(
                monitor,
                debug,
                tick_interval,
                scroll_interval,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch MMDVM Monitor GUI: {e}");
        std::process::exit(1);
    }
}

/// Tick until stdout goes away, writing one JSON object per new station.
fn run_headless(mut monitor: app::monitor::Monitor, config: &platform::config::AppConfig) {
    let scheduler = app::scheduler::Scheduler::new(config.tick_rate_hz);
    let cancel = scheduler.cancel_handle();
    let stdout = std::io::stdout();

    scheduler.run(&mut monitor, |report, _snapshot| {
        if report.recorded.is_empty() {
            return;
        }
        let mut out = stdout.lock();
        for entry in &report.recorded {
            let written = serde_json::to_writer(&mut out, entry)
                .map_err(std::io::Error::from)
                .and_then(|()| writeln!(out))
                .and_then(|()| out.flush());
            if let Err(e) = written {
                tracing::info!(error = %e, "stdout closed; stopping");
                cancel.store(true, Ordering::SeqCst);
                return;
            }
        }
    });
}
