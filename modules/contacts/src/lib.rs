// === PUBLIC CONTRACT ===
// Pure models consumed by every other layer.
pub mod contract;

pub use contract::model;

// === INTERNAL LAYERS ===
// Exposed so the server binary can wire them together and tests can reach
// them; the `contract` module is the stable surface.
pub mod api;
pub mod domain;
pub mod infra;
