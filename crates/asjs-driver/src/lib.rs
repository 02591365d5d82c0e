//! Run orchestration for the asjs cross-compiler.
//!
//! Wires the emitter to its inputs and outputs: selects which compilation
//! units are visible, routes their emitted text through an output policy,
//! and materializes artifacts through an [`ArtifactWriter`].

pub mod assembler;
pub mod settings;
pub mod writer;

pub use assembler::UnitAssembler;
pub use settings::{OutputPolicy, TargetSettings};
pub use writer::{ArtifactWriter, FileSystemWriter};
