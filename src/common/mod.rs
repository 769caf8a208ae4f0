pub mod bench;
pub mod constants;
pub mod counter;
pub mod error;
pub mod grid;
pub mod mandelbrot;
