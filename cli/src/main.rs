mod commands;
mod terminal;

use commands::{CommandLine, Commands, inventory, resolve, run, update};
use optics_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let mut cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        ..Config::default()
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Inventory { topology } => {
            print::header("transceiver inventory", cfg.quiet);
            inventory::inventory(&topology.topology, &cfg).await
        }
        Commands::Update { topology, update: update_args } => {
            update_args.apply(&mut cfg);
            print::header("optics power update", cfg.quiet);
            update::update(&topology.topology, &cfg).await
        }
        Commands::Run { topology, update: update_args } => {
            update_args.apply(&mut cfg);
            print::header("running all optics checks", cfg.quiet);
            run::run(&topology.topology, &cfg).await
        }
        Commands::Resolve { interface, vendor } => resolve::resolve(&interface, vendor, &cfg),
    }
}
