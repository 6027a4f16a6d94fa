pub mod error;
pub mod lane;

pub use error::{LaneError, Result};
pub use lane::{CarId, ParkingLane};
