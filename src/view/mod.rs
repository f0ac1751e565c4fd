// VIEW: projection and drawing
pub mod projector;
pub mod surface;
pub mod scene;
pub mod raster;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use projector::{rotate, Projector};
pub use surface::{Color, DrawingSurface};
pub use scene::{FrameLayout, SceneRenderer};
pub use raster::RasterSurface;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
