//! Service layer: stateful orchestration over the pure domain core.

pub mod mega_sena;
