use cdn_ip_checker::cli::Cli;
use cdn_ip_checker::output::format_fatal;
use cdn_ip_checker::{logging, run, Config};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    if let Err(e) = logging::init_logging(&cli.log_config) {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main()");

    let stdin = std::io::stdin();
    let result = Config::from_cli(cli, stdin.lock(), std::io::stdout()).and_then(|c| run(&c));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("{}", format_fatal(&e));
            ExitCode::FAILURE
        }
    }
}
