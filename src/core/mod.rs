pub mod color;
pub mod connections;
pub mod constants;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod random;
pub mod sim;
pub mod surface;
pub mod viewport;

pub use color::*;
pub use connections::*;
pub use constants::*;
pub use field::*;
pub use particle::*;
pub use pointer::*;
pub use sim::*;
pub use surface::*;
pub use viewport::*;
