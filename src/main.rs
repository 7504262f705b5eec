use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use textview::cli::{handle_config_action, Args, Command};
use textview::config::{self, Config};
use textview::error::{Result, TvError};
use textview::fetch::Fetcher;
use textview::inputs::{reads_stdin, InputList};
use textview::settings::Settings;
use textview::viewer::Viewer;

/// Load the config file, treating an explicit `--config` path as mandatory.
fn load_config(explicit: Option<PathBuf>) -> Config {
    match explicit {
        Some(path) => match Config::load_from_explicit(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("{}; using defaults", e);
            Config::default()
        }),
    }
}

/// Set up the Ctrl+C handler, returning the flag it raises.
fn setup_ctrlc_handler() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);
    if let Err(e) = ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    }) {
        log::warn!("Could not install Ctrl+C handler: {}", e);
    }
    flag
}

fn print_header<W: Write>(out: &mut W, name: &str) -> Result<()> {
    writeln!(out, "{}", name)?;
    Ok(())
}

fn run_files<W: Write>(
    viewer: &Viewer,
    inputs: &InputList,
    headers: bool,
    out: &mut W,
) -> Result<()> {
    for name in &inputs.names {
        if headers {
            print_header(out, name)?;
        }
        viewer.show_file(name, out)?;
    }
    Ok(())
}

fn run_urls<W: Write>(
    viewer: &Viewer,
    inputs: &InputList,
    headers: bool,
    out: &mut W,
) -> Result<()> {
    let fetcher = Fetcher::new(viewer.settings().fetch_timeout)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    for url in &inputs.names {
        if headers {
            print_header(out, url)?;
        }
        match runtime.block_on(viewer.show_url(&fetcher, url, out)) {
            Err(e) if e.is_recoverable() => log::warn!("Skipping {}: {}", url, e),
            other => other?,
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(args.config.clone());

    let settings = match Settings::resolve(&args, &config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(Command::Config { action }) = args.command {
        let path = args.config.clone().unwrap_or_else(config::default_path);
        handle_config_action(action, &settings, &path);
        return ExitCode::SUCCESS;
    }

    if reads_stdin(&args.images) && io::stdin().is_terminal() {
        eprintln!("Error: no images given (pass file names, or pipe them on stdin)");
        return ExitCode::from(2);
    }

    let inputs = match InputList::collect(&args.images, io::stdin().lock()) {
        Ok(inputs) if args.urls => inputs.into_urls(),
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error reading image list: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if inputs.is_empty() {
        log::info!("nothing to show");
        return ExitCode::SUCCESS;
    }

    let viewer = Viewer::new(settings).with_cancel(setup_ctrlc_handler());
    let headers = inputs.show_headers(args.nofn);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.stack {
        viewer.show_stack(&inputs.names, &mut out)
    } else if args.urls {
        run_urls(&viewer, &inputs, headers, &mut out)
    } else {
        run_files(&viewer, &inputs, headers, &mut out)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(TvError::Interrupted) => {
            log::info!("interrupted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
