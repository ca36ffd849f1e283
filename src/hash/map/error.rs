use derive_more::{Display, Error};

/// The error produced when a requested capacity can't be represented, because computing the
/// number of buckets overflows [`usize`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
