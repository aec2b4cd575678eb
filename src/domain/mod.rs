// Domain layer: backend DTOs and the ports the query layer depends on.

pub mod model;
pub mod ports;
