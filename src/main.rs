use clap::Parser;
use shelve::config::Cli;
use shelve::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from(cli);

    shelve::commands::organize::run(config)?;

    Ok(())
}
