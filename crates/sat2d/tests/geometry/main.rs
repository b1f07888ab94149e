#[macro_use]
extern crate approx;

mod polygon_transform;
