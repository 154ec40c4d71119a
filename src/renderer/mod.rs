pub mod components;
pub mod renderer;
pub mod template;
pub mod traits;

pub use components::*;
pub use renderer::*;
pub use template::*;
pub use traits::*;
