mod depth_sweep;

pub use depth_sweep::{DepthPoint, DepthSweep};
