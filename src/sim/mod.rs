pub mod constants;
pub mod controller;
pub mod globe;
pub mod interaction;
pub mod scene;

pub use controller::*;
pub use globe::*;
pub use interaction::*;
pub use scene::*;
