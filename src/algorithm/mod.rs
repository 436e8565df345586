/// Per-lane index of blocked ranges
pub mod blocking;
/// Breadth-first crossing-direction solver
pub mod crossing;
/// Layout orchestration and rendering query surface
pub mod layout;
/// Per-node segment generation
pub mod segments;
