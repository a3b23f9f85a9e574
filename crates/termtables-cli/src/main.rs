use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    match cli::run(&args) {
        Ok(rendered) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(rendered.as_bytes()) {
                log::debug!("stdout closed: {}", err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("termtables: {err:#}");
            ExitCode::FAILURE
        }
    }
}
