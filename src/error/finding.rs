use thiserror::Error;

use crate::model::finding::FindingStatus;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FindingError {
    #[error("Finding {id} cannot move from {} to {}", .from.label(), .to.label())]
    InvalidTransition {
        id: String,
        from: FindingStatus,
        to: FindingStatus,
    },
    #[error("{0} is required")]
    MissingText(&'static str),
}
