//! Console rendering of network reports: headers, aligned key/value
//! lines and numbered subnet blocks.

use std::fmt::Display;
use std::net::IpAddr;

use colored::*;
use subnetr_core::{AddressSpace, NetworkSummary};

pub const TOTAL_WIDTH: usize = 64;

/// Width of the longest report key, for dot alignment.
const KEY_WIDTH: usize = 21;

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{}", line);
}

pub fn blank() {
    println!();
}

fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    println!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
}

fn flag(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".normal()
    }
}

fn opt_addr(addr: Option<IpAddr>) -> ColoredString {
    match addr {
        Some(addr) => addr.to_string().normal(),
        None => "n/a".dimmed(),
    }
}

/// Renders the full report block for one network.
pub fn summary(summary: &NetworkSummary) {
    aligned_line("Network address", summary.network_address);
    aligned_line("Netmask", summary.netmask);
    aligned_line("Prefix", format!("/{}", summary.prefix_len));
    aligned_line("Private network", flag(summary.is_private));
    aligned_line("Link-local network", flag(summary.is_link_local));
    aligned_line("Usable host addresses", summary.usable_hosts);
    aligned_line("First usable host", opt_addr(summary.first_usable));
    aligned_line("Last usable host", opt_addr(summary.last_usable));
    aligned_line("Broadcast address", summary.broadcast);
}

fn subnet_head(idx: usize, network: &AddressSpace) {
    println!(
        "{} {}",
        format!("[{}]", (idx + 1).to_string().bright_green()).bright_black(),
        network.to_string().cyan()
    );
}

/// Renders every allocated subnet as a numbered block.
pub fn subnet_list(subnets: &[AddressSpace]) {
    for (idx, subnet) in subnets.iter().enumerate() {
        let details = NetworkSummary::describe(subnet);
        subnet_head(idx, subnet);
        aligned_line("Netmask", details.netmask);
        aligned_line("Usable host addresses", details.usable_hosts);
        aligned_line("First usable host", opt_addr(details.first_usable));
        aligned_line("Last usable host", opt_addr(details.last_usable));
        aligned_line("Broadcast address", details.broadcast);
        if idx + 1 != subnets.len() {
            blank();
        }
    }
}
