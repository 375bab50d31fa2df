//! Pointer-driven tilt for the stacked dashboard preview cards.

pub mod frame_loop;
pub mod state;
pub mod transform;

pub use frame_loop::{AnimationFrameScheduler, FrameLoop};
pub use state::{PreviewAction, PreviewState};
pub use transform::{compute_transform, transition, Layer, ParallaxConfig, PointerSample, RegionRect};
