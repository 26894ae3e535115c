//! Application startup: arguments, configuration, logging, then the command

use crate::app::cli::args::{Args, Backend, Command, OutputFormat};
use crate::app::cli::config::{FileConfig, Settings};
use crate::app::event_loop::{ctrl_c, run_scan_loop, spawn_manual_input, LoopExit};
use crate::controller::api::{LookupSession, ScanController};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::styles::palette_to_clap;
use crate::core::version::long_version;
use crate::lookup::api::{
    AdditiveCatalog, HttpLookupClient, LookupOutcome, LookupResult, OpenFoodFactsLookup,
    ProductLookup,
};
use crate::presentation::api::{JsonSink, PresentationSink, Renderer, TerminalSink};
use crate::scanner::api::{LineScanSource, ScanSource};
use clap::{CommandFactory, FromArgMatches};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Parse the command line and run the selected command to completion
pub fn startup() -> ExitCode {
    let help_color = colored::control::SHOULD_COLORIZE.should_colorize();
    let matches = Args::command()
        .styles(palette_to_clap(help_color))
        .get_matches();
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error starting async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(run(args))
}

async fn run(args: Args) -> ExitCode {
    // Logging is not up yet, so configuration problems go straight to stderr
    let settings = match FileConfig::load(args.config_file.as_deref())
        .await
        .and_then(|file| Settings::resolve(file, &args))
    {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let color = settings.use_color();
    if let Err(e) = init_logging(
        settings.log_level.as_deref(),
        settings.log_format.as_deref(),
        settings.log_file.as_deref(),
        color,
    ) {
        eprintln!("Error initialising logging: {}", e);
        return ExitCode::FAILURE;
    }
    log::info!("nutriscan {} starting", long_version());
    log::debug!("Settings: {:?}", settings);

    match &args.command {
        Command::Devices => list_devices(&settings).await,
        Command::Lookup { code } => lookup_once(&settings, code, color).await,
        Command::Scan { device } => scan(&settings, device.clone(), color).await,
    }
}

async fn list_devices(settings: &Settings) -> ExitCode {
    let source = LineScanSource::new(settings.devices.clone());
    match source.enumerate_devices().await {
        Ok(devices) if !devices.is_empty() => {
            for device in devices {
                println!("{}", device);
            }
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("No camera found.");
            ExitCode::FAILURE
        }
        Err(e) => {
            log_error_with_context(&e, "Enumerating scan devices");
            ExitCode::FAILURE
        }
    }
}

async fn lookup_once(settings: &Settings, code: &str, color: bool) -> ExitCode {
    let Some(mut session) = build_session(settings, settings.devices.clone(), color).await else {
        return ExitCode::FAILURE;
    };

    let Some(pending) = session.on_manual_submit(code.trim()) else {
        eprintln!("No code given");
        return ExitCode::FAILURE;
    };
    match session.complete(pending).await {
        LookupOutcome::Success(_) => ExitCode::SUCCESS,
        LookupOutcome::Failure(_) => ExitCode::FAILURE,
    }
}

async fn scan(settings: &Settings, device: Option<PathBuf>, color: bool) -> ExitCode {
    let devices = device.map_or_else(|| settings.devices.clone(), |d| vec![d]);
    let Some(mut session) = build_session(settings, devices, color).await else {
        return ExitCode::FAILURE;
    };

    // A failed start drops the signal sender, so only manual entry remains
    let (signal_tx, signals) = mpsc::unbounded_channel();
    let scanning_stdin = match session
        .start_scanning(settings.scan_options, signal_tx)
        .await
    {
        Ok(device) => device.is_stdin(),
        Err(e) => {
            log::warn!("Scanning unavailable, manual entry only: {}", e);
            false
        }
    };

    let (manual_tx, manual) = mpsc::unbounded_channel();
    if scanning_stdin {
        log::info!("Reading scanned codes from stdin; manual entry is disabled");
        drop(manual_tx);
    } else {
        spawn_manual_input(manual_tx);
    }

    match run_scan_loop(&mut session, signals, manual, ctrl_c()).await {
        LoopExit::Drained => log::info!("All inputs closed"),
        LoopExit::Interrupted => log::info!("Interrupted"),
    }
    ExitCode::SUCCESS
}

async fn build_session(
    settings: &Settings,
    devices: Vec<PathBuf>,
    color: bool,
) -> Option<LookupSession<Box<dyn PresentationSink>>> {
    let lookup = match build_lookup(settings).await {
        Ok(lookup) => lookup,
        Err(e) => {
            log_error_with_context(&e, "Configuring product lookup");
            return None;
        }
    };

    let sink: Box<dyn PresentationSink> = match settings.output {
        OutputFormat::Text => Box::new(TerminalSink::new(std::io::stdout(), color)),
        OutputFormat::Json => Box::new(JsonSink::new(std::io::stdout())),
    };
    let source: Arc<dyn ScanSource> = Arc::new(LineScanSource::new(devices));

    Some(LookupSession::new(
        ScanController::new(source),
        Renderer::new(sink, settings.placeholder_image.clone()),
        lookup,
    ))
}

async fn build_lookup(settings: &Settings) -> LookupResult<Arc<dyn ProductLookup>> {
    let lookup: Arc<dyn ProductLookup> = match settings.backend {
        Backend::Service => Arc::new(HttpLookupClient::new(&settings.base_url, settings.timeout)?),
        Backend::OpenFoodFacts => {
            let additives = AdditiveCatalog::load(&settings.additives_file).await;
            Arc::new(OpenFoodFactsLookup::new(
                &settings.off_base_url,
                settings.timeout,
                additives,
            )?)
        }
    };
    log::debug!("Using {} lookup backend", lookup.name());
    Ok(lookup)
}

