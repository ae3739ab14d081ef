pub mod swipe;

pub use swipe::{RowTransform, SwipeConfig, SwipeTracker};
