use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

fn main() {
    let cli = cli::Cli::parse();
    services::trace::initialize_tracer();

    if let Err(err) = commands::handle_session(&cli) {
        tracing::debug!(error = ?err, "session aborted");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
