pub mod flsm;
pub mod info;
pub mod interactive;
pub mod vlsm;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use subnetr_core::AddressSpace;

#[derive(Parser)]
#[command(name = "subnetr")]
#[command(about = "An IPv4/IPv6 subnet calculator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Also write the report to a plain-text file (regenerated each run)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about a network (e.g. 192.168.1.0/24)
    #[command(alias = "i")]
    Info { network: AddressSpace },
    /// Split a network into N equal-sized subnets
    #[command(alias = "f")]
    Flsm { network: AddressSpace, count: u128 },
    /// Allocate subnets sized to exact host requirements
    #[command(alias = "v")]
    Vlsm {
        network: AddressSpace,
        #[arg(required = true)]
        hosts: Vec<u128>,
    },
    /// Prompt for the network and subnetting mode interactively
    #[command(alias = "x")]
    Interactive,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
