// Domain layer: the profile model and the ports the scanner consumes.

pub mod model;
pub mod ports;
