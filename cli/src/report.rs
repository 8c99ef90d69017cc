//! Plain-text results file.
//!
//! The file is regenerated from scratch on every run; it is a report,
//! not a log, so nothing is ever appended.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use subnetr_core::{AddressSpace, NetworkSummary};

pub fn write(path: &Path, network: &AddressSpace, subnets: &[AddressSpace]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    render(&mut out, network, subnets)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    out.flush().context("failed to flush report file")?;
    Ok(())
}

fn render(
    out: &mut impl Write,
    network: &AddressSpace,
    subnets: &[AddressSpace],
) -> std::io::Result<()> {
    let summary = NetworkSummary::describe(network);

    writeln!(
        out,
        "Network address: {} {}",
        summary.network_address, summary.netmask
    )?;
    writeln!(out, "Prefix: /{}", summary.prefix_len)?;
    writeln!(out, "Is private network? {}", summary.is_private)?;
    writeln!(out, "Is link local network? {}", summary.is_link_local)?;
    writeln!(
        out,
        "Number of usable host addresses: {}",
        summary.usable_hosts
    )?;
    writeln!(out, "First usable host address: {}", fmt_opt(summary.first_usable))?;
    writeln!(out, "Last usable host address: {}", fmt_opt(summary.last_usable))?;
    writeln!(out, "Broadcast address: {}", summary.broadcast)?;

    for (idx, subnet) in subnets.iter().enumerate() {
        let details = NetworkSummary::describe(subnet);

        writeln!(out)?;
        writeln!(out, "Subnet {}", idx + 1)?;
        writeln!(
            out,
            "Network address: {} {}",
            details.network_address, details.netmask
        )?;
        writeln!(out, "Prefix: /{}", details.prefix_len)?;
        writeln!(out, "Number of hosts: {}", details.usable_hosts)?;
        writeln!(out, "First usable host address: {}", fmt_opt(details.first_usable))?;
        writeln!(out, "Last usable host address: {}", fmt_opt(details.last_usable))?;
        writeln!(out, "Broadcast address: {}", details.broadcast)?;
    }

    Ok(())
}

fn fmt_opt(addr: Option<std::net::IpAddr>) -> String {
    match addr {
        Some(addr) => addr.to_string(),
        None => "n/a".to_string(),
    }
}
