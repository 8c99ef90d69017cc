//! Interactive input collection.
//!
//! Every reader is a result-returning function with a bounded retry
//! loop: a rejected line is surfaced as a warning and re-prompted, and
//! after [`MAX_ATTEMPTS`] rejections the whole command fails instead of
//! looping forever.

use std::io::{self, Write};

use anyhow::{Context, bail};
use subnetr_core::AddressSpace;
use tracing::warn;

pub const MAX_ATTEMPTS: usize = 5;

/// Subnetting mode chosen at the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Vlsm,
    Flsm,
    None,
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn read_with<T>(prompt: &str, parse: impl Fn(&str) -> Result<T, String>) -> anyhow::Result<T> {
    for _ in 0..MAX_ATTEMPTS {
        let line = prompt_line(prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(reason) => warn!("{reason}"),
        }
    }
    bail!("no valid input after {MAX_ATTEMPTS} attempts")
}

pub fn read_network() -> anyhow::Result<AddressSpace> {
    read_with("Enter an IPv4/IPv6 address and prefix", |s| {
        s.parse::<AddressSpace>().map_err(|e| e.to_string())
    })
}

pub fn read_mode() -> anyhow::Result<Mode> {
    read_with(
        "1 - Variable length subnetting (VLSM), 2 - Fixed length subnetting (FLSM), n - None",
        |s| match s.to_ascii_lowercase().as_str() {
            "1" => Ok(Mode::Vlsm),
            "2" => Ok(Mode::Flsm),
            "n" => Ok(Mode::None),
            other => Err(format!("expected 1, 2 or n, got '{other}'")),
        },
    )
}

pub fn read_host_counts() -> anyhow::Result<Vec<u128>> {
    read_with(
        "Enter the number of hosts in each subnet (space-separated)",
        |s| {
            let counts: Vec<u128> = s
                .split_whitespace()
                .map(parse_positive)
                .collect::<Result<_, _>>()?;
            if counts.is_empty() {
                return Err("expected at least one host count".to_string());
            }
            Ok(counts)
        },
    )
}

pub fn read_subnet_count() -> anyhow::Result<u128> {
    read_with("Enter the number of subnets to create", parse_positive)
}

fn parse_positive(s: &str) -> Result<u128, String> {
    match s.parse::<u128>() {
        Ok(0) => Err(format!("'{s}' must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{s}' is not a positive integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("42"), Ok(42));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-3").is_err());
        assert!(parse_positive("ten").is_err());
    }
}
