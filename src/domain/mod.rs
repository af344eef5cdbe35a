// Domain layer: property and schedule models plus the storage port.

pub mod model;
pub mod ports;
