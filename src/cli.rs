use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vehicle-risk",
    version,
    about = "Interactive vehicle insurance risk assessment"
)]
pub struct Cli {
    #[arg(long, help = "Print the risk registry as machine-readable JSON")]
    pub json: bool,
}
