/// Neighbor-aware palette re-weighting
pub mod adjustment;
/// Cluster growth from a seed cell
pub mod cluster;
/// Generation run orchestration
pub mod generator;
/// Weighted random color selection
pub mod sampler;
