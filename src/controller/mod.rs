// CONTROLLER: input events, gesture handling and the viewer loop
pub mod input;
pub mod camera_controller;
pub mod viewer;

pub use input::{InputEvent, InputResponse};
pub use camera_controller::CameraController;
pub use viewer::Viewer;
