use std::path::Path;

use subnetr_core::{AddressSpace, NetworkSummary, vlsm};
use tracing::info;

use crate::report;
use crate::terminal::print;

pub fn vlsm(network: &AddressSpace, hosts: &[u128], output: Option<&Path>) -> anyhow::Result<()> {
    print::summary(&NetworkSummary::describe(network));

    let subnets = vlsm::partition(network, hosts)?;

    print::blank();
    print::subnet_list(&subnets);

    if let Some(path) = output {
        report::write(path, network, &subnets)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
