//! Core constraint-solving engine
//!
//! Domain representation, socket compatibility, one-hop propagation,
//! minimum-remaining-candidates selection, and the attempt/regeneration loop.

/// Socket adjacency law and the derived diagonal test
pub mod compatibility;
/// Bitset domains over registry module indices
pub mod domain;
/// One-hop orthogonal and diagonal propagation
pub mod propagation;
/// Minimum-remaining-candidates cell selection
pub mod selection;
/// Generation attempts and the outer regeneration loop
pub mod solver;
