mod coin_snapshot;

pub use coin_snapshot::CoinSnapshot;

#[cfg(test)]
pub(crate) use coin_snapshot::snapshot;
