mod commands;
mod input;
mod report;
mod terminal;

use commands::{CommandLine, Commands, flsm, info, interactive, vlsm};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    if commands.no_color {
        colored::control::set_override(false);
    }

    let output = commands.output.as_deref();

    match commands.command {
        Commands::Info { network } => {
            print::header("network information");
            info::info(&network, output)
        }
        Commands::Flsm { network, count } => {
            print::header("fixed length subnetting");
            flsm::flsm(&network, count, output)
        }
        Commands::Vlsm { network, hosts } => {
            print::header("variable length subnetting");
            vlsm::vlsm(&network, &hosts, output)
        }
        Commands::Interactive => {
            print::header("interactive calculator");
            interactive::interactive(output)
        }
    }
}
