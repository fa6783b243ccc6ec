// Domain layer: record types, the fixed name tables and the ports the loader depends on.

pub mod model;
pub mod names;
pub mod ports;
