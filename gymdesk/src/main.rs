use clap::Parser;
use eyre::Result;
use gymdesk::command::GymdeskCmd;
use gymdesk::VERSION;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gymdesk",
    version = VERSION,
    about = "Administrative console for the gym front desk"
)]
struct Gymdesk {
    #[command(subcommand)]
    gymdesk: GymdeskCmd,
}

impl Gymdesk {
    fn run(self) -> Result<()> {
        self.gymdesk.run()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Gymdesk::parse().run()
}
