use std::path::Path;

use subnetr_core::{AddressSpace, NetworkSummary};
use tracing::info;

use crate::report;
use crate::terminal::print;

pub fn info(network: &AddressSpace, output: Option<&Path>) -> anyhow::Result<()> {
    print::summary(&NetworkSummary::describe(network));

    if let Some(path) = output {
        report::write(path, network, &[])?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
