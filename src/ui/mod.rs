//! Terminal UI components.

use inquire::InquireError;

mod render;
mod spinner;
mod style;

pub use render::{View, render};
pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
