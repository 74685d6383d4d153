//! Confirmation prompt port

use crate::core::models::Confirmation;

/// Asks the user yes/no questions
///
/// Returning `Ok(false)` means "no"; implementations must treat empty input
/// the same way.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Ask `question`, returning the user's answer
    fn confirm(&mut self, question: &Confirmation) -> anyhow::Result<bool>;
}
