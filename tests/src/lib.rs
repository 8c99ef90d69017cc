#[cfg(test)]
mod partitioning;
