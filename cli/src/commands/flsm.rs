use std::path::Path;

use subnetr_core::{AddressSpace, NetworkSummary, flsm};
use tracing::info;

use crate::report;
use crate::terminal::print;

pub fn flsm(network: &AddressSpace, count: u128, output: Option<&Path>) -> anyhow::Result<()> {
    print::summary(&NetworkSummary::describe(network));

    let subnets = flsm::partition(network, count)?;
    if subnets.len() as u128 > count {
        info!(
            "{count} subnets requested, {} equal-sized blocks produced",
            subnets.len()
        );
    }

    print::blank();
    print::subnet_list(&subnets);

    if let Some(path) = output {
        report::write(path, network, &subnets)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
