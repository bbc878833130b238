//! Failure kinds surfaced by cart mutations.

use thiserror::Error;

/// The closed set of user-visible failure kinds.
///
/// Each mutation reports at most one kind per invocation, and the
/// presentable message is derived from the kind; callers discriminate
/// on the variant, never on the string. Out-of-stock is a separate kind
/// from the per-operation service failures: a stock of zero is an
/// answer, an unreachable service is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CartFailure {
    /// The requested amount exceeds the live stock level.
    #[error("requested amount exceeds available stock")]
    OutOfStock,

    /// Adding the item could not be completed.
    #[error("adding the item could not be completed")]
    AddFailed,

    /// The item to remove is not in the cart.
    #[error("removing the item could not be completed")]
    RemoveFailed,

    /// Changing the item's quantity could not be completed.
    #[error("changing the item quantity could not be completed")]
    SetAmountFailed,
}

impl CartFailure {
    /// The non-technical message shown to the user for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            CartFailure::OutOfStock => "Requested quantity is out of stock",
            CartFailure::AddFailed => "Could not add the product",
            CartFailure::RemoveFailed => "Could not remove the product",
            CartFailure::SetAmountFailed => "Could not update the product quantity",
        }
    }
}
