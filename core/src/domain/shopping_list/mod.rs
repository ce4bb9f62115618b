pub mod aggregation;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
