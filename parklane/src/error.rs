use thiserror::Error;

use crate::lane::CarId;

/// Recoverable outcomes of lane operations. Nothing here terminates the
/// process; both variants leave the lane in a well-defined state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneError {
    /// Admit attempted while every slot is occupied. The lane is unchanged.
    #[error("parking lane full ({capacity} slots occupied)")]
    Full { capacity: usize },

    /// Retrieval target absent after a full scan. The lane has been restored
    /// to its pre-call order.
    #[error("car {car} not found in lane")]
    NotFound { car: CarId },
}

pub type Result<T> = std::result::Result<T, LaneError>;
