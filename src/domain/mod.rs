// Domain layer: models, ports (interfaces) and the pure line classifiers.
// No I/O here; adapters live under config/ and core/.

pub mod model;
pub mod ports;
pub mod services;
