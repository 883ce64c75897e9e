pub mod farm;
pub mod gpu;
pub mod rig;

pub use farm::{Farm, FarmSummary, NewFarm};
pub use gpu::{Gpu, NewGpu};
pub use rig::{MoveRigRequest, MoveRigsRequest, Rig};
