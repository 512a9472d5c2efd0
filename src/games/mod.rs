//! Rule sets built on the engine.

pub mod eights;
