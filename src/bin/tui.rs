use anyhow::Result;
use chrono::Local;
use std::io;
use std::process::ExitCode;
use utsav::cli::{self, Command};
use utsav::config::Config;
use utsav::context::{AppContext, StandardContext};
use utsav::controller::FestivalController;
use utsav::logging;
use utsav::store::FestivalStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation = match cli::parse_args(std::env::args().skip(1)) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if invocation.command == Command::Help {
        cli::print_help("utsav");
        return ExitCode::SUCCESS;
    }

    let ctx = StandardContext::new(invocation.override_root.clone());
    match run(&ctx, invocation.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(ctx: &dyn AppContext, command: Command) -> Result<()> {
    let config = Config::load(ctx)?;
    if let Err(e) = logging::init(ctx, config.log_level_filter()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let mut out = io::stdout();
    match command {
        Command::List => {
            let store = FestivalStore::open(config.festival_path(ctx)?);
            cli::write_list(&store, &mut out)
        }
        Command::Add { name, month, day } => {
            let mut store = FestivalStore::open(config.festival_path(ctx)?);
            cli::add(&mut store, &name, &month, &day, &mut out)
        }
        Command::Remove(index) => {
            let mut store = FestivalStore::open(config.festival_path(ctx)?);
            cli::remove(&mut store, index, &mut out)
        }
        Command::Next => {
            let controller = FestivalController::bootstrap(ctx, &config)?;
            cli::write_next(&controller, Local::now().naive_local(), &mut out)
        }
        Command::Tui => {
            // Missing calendar data stops us here, before the terminal is touched.
            let controller = FestivalController::bootstrap(ctx, &config)?;
            logging::install_panic_hook(ctx, utsav::tui::restore_terminal);
            utsav::tui::run(controller).await
        }
        Command::Help => {
            cli::print_help("utsav");
            Ok(())
        }
    }
}
