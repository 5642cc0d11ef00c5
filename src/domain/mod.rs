// Domain layer: the student records and the ports view-models depend on.

pub mod model;
pub mod ports;
