//! JavaScript emission for the asjs cross-compiler.
//!
//! The emitter walks a fully-resolved AST (see `asjs-ast`) and produces
//! prototype-based JavaScript. It performs no I/O: text accumulates in the
//! [`EmitContext`]'s sink and the driver decides how it is materialized.

pub mod context;
pub mod emitter;

pub use context::EmitContext;
pub use emitter::{JsEmitter, RUNTIME_NAMESPACE};
