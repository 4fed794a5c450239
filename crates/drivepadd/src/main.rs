mod cli;
mod logging;
mod profiler;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::unbounded;

use drivepad_control::Decoder;
use drivepad_controller::{EvdevBackend, PadPilot, PadSession};
use drivepad_profile::Profile;

use crate::cli::{Cli, Command};

const DEFAULT_SEARCH_TERM: &str = "Nintendo";

fn main() {
    let args = Cli::parse();
    logging::setup(args.verbose, args.no_color);

    // A broken profile is an operator error; bail out immediately.
    let profile = match &args.config {
        Some(path) => Profile::from_path(path).expect("failed to load controller profile"),
        None => Profile::wiiu_pro(),
    };

    match args.command {
        Command::Log { ref search_term } => {
            let term = resolve_search_term(search_term.as_deref(), &profile);
            run_log(profile, &term);
        }
        Command::Profile { ref search_term } => {
            let term = resolve_search_term(search_term.as_deref(), &profile);
            run_profile(profile, &term);
        }
    }
}

/// CLI argument wins over the profile's search term; "Nintendo" is the
/// fallback.
fn resolve_search_term(cli_term: Option<&str>, profile: &Profile) -> String {
    cli_term
        .or(profile.device_search_term.as_deref())
        .unwrap_or(DEFAULT_SEARCH_TERM)
        .to_string()
}

fn run_log(profile: Profile, search_term: &str) {
    let session = match PadSession::connect(EvdevBackend, search_term) {
        Ok(session) => session,
        Err(e) => {
            print_error!("{e}");
            return;
        }
    };
    let decoder = Decoder::new(profile.button_map, profile.joystick_max_value);
    let mut pilot = PadPilot::new(session, decoder, true);

    // Handle Ctrl+C to exit cleanly; checked between blocking reads.
    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .expect("failed to set Ctrl+C handler");

    print_info!("drivepadd started. logging events from '{}'.", pilot.device_name());
    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }
        if let Err(e) = pilot.step() {
            print_error!("session error: {e}");
            break;
        }
    }
    pilot.shutdown();
    print_info!("drivepadd stopped.");
}

fn run_profile(profile: Profile, search_term: &str) {
    let mut session = match PadSession::connect(EvdevBackend, search_term) {
        Ok(session) => session,
        Err(e) => {
            print_error!("{e}");
            return;
        }
    };
    let decoder = Decoder::new(profile.button_map, profile.joystick_max_value);
    if let Err(e) = profiler::run(&mut session, &decoder) {
        print_error!("profiling failed: {e}");
    }
    session.shutdown();
}
