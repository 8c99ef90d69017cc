use std::path::Path;

use subnetr_core::{NetworkSummary, flsm, vlsm};
use tracing::info;

use crate::input::{self, Mode};
use crate::report;
use crate::terminal::print;

/// Default results file, matching the classic calculator's output name.
const DEFAULT_REPORT: &str = "ip_and_subnets.txt";

/// The prompt-driven flow: network, then mode, then the mode's inputs.
/// Always writes the results file at the end, like the classic tool.
pub fn interactive(output: Option<&Path>) -> anyhow::Result<()> {
    let network = input::read_network()?;

    print::blank();
    print::summary(&NetworkSummary::describe(&network));
    print::blank();

    let subnets = match input::read_mode()? {
        Mode::Vlsm => vlsm::partition(&network, &input::read_host_counts()?)?,
        Mode::Flsm => flsm::partition(&network, input::read_subnet_count()?)?,
        Mode::None => Vec::new(),
    };

    if !subnets.is_empty() {
        print::blank();
        print::subnet_list(&subnets);
    }

    let path = output.unwrap_or(Path::new(DEFAULT_REPORT));
    report::write(path, &network, &subnets)?;
    info!("report written to {}", path.display());

    Ok(())
}
