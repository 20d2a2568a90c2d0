mod ids;
mod clocks;
mod id_generators;
mod annotations;
mod duration;
mod endpoint;
mod span;
pub mod wire;
pub mod export;

pub use ids::*;
pub use clocks::*;
pub use id_generators::*;
pub use annotations::*;
pub use duration::*;
pub use endpoint::*;
pub use span::*;
