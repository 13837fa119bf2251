pub mod clock;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod feed;
pub mod garland;
pub mod particles;
pub mod projector;
pub mod scene;
pub mod topper;

pub use clock::*;
pub use config::*;
pub use draw::*;
pub use error::*;
pub use feed::*;
pub use garland::*;
pub use particles::*;
pub use projector::*;
pub use scene::*;
pub use topper::*;
