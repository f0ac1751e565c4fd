// MODEL: camera, gesture sessions and the Moon ephemeris
pub mod camera;
pub mod gesture;
pub mod ephemeris;
pub mod summary;

pub use camera::CameraState;
pub use gesture::{MouseDrag, TouchGesture};
pub use ephemeris::{julian_date, moon_position, moon_position_jd, MOON_ORBIT_A};
pub use summary::{LaunchSummary, MissionParams};
