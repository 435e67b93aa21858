use thiserror::Error;

/// Contract violations reported by handle-taking operations.
///
/// Absence (an empty stack on `pop`, a missing key on `search`, a node with
/// no predecessor) is never an error; those cases are `None`/`Ok(None)`.
/// An `Error` only occurs when the caller breaks an operation's contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A [`NodeId`](crate::NodeId) referred to a node that is no longer in
    /// the structure (it was deleted, or the handle came from a different
    /// structure). The operation failed before mutating anything.
    #[error("node handle does not name a live node")]
    StaleHandle,
}
