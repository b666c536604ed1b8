use crate::opts::{Mintkit, MintkitSubcommand};
use clap::Parser;
use eyre::Result;
use mintkit_cli::{handler, utils};

/// Run the `mintkit` command-line interface.
pub fn run() -> Result<()> {
    handler::install();

    let args = Mintkit::parse();
    setup(&args);
    run_command(args)
}

/// Setup the global logger and other utilities.
///
/// The dotenv files are loaded before the subscriber so `RUST_LOG` can be set in `.env`.
pub fn setup(args: &Mintkit) {
    utils::load_dotenv(args.cmd.root());
    utils::subscriber();
}

/// Run the subcommand.
pub fn run_command(args: Mintkit) -> Result<()> {
    match args.cmd {
        MintkitSubcommand::Abi(cmd) => cmd.run(),
        MintkitSubcommand::Config(cmd) => cmd.run(),
    }
}
