pub mod auto_motion;
pub mod input_adapter;
pub mod rig;
pub mod snapshot;
pub mod timer;

pub use auto_motion::{AutoMotion, MotionAxis};
pub use input_adapter::{DragAction, InputEvent, MouseLock, PointerInput};
pub use rig::{CameraPreset, CameraRig, KeyCommand};
pub use snapshot::CameraSnapshot;
pub use timer::FixedStep;
