//! Board invariants checked after every accepted move.
//!
//! Each invariant is a zero-sized type implementing [`Invariant`]. Tuples of
//! invariants implement [`InvariantSet`], which checks every member and
//! reports all failures at once. [`Game::make_move`](crate::Game::make_move)
//! runs [`GameInvariants`] in debug builds.

pub mod history_consistent;
pub mod mark_balance;
pub mod single_winner;

pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;

use derive_more::Display;

/// A property every reachable state `S` satisfies.
pub trait Invariant<S> {
    /// What the invariant asserts, for violation reports.
    const NAME: &'static str;

    /// True if `state` satisfies the invariant.
    fn holds(state: &S) -> bool;
}

/// A failed invariant, identified by its [`Invariant::NAME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("invariant violated: {}", _0)]
pub struct InvariantViolation(pub &'static str);

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// Checks every member, returning all violations if any fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let failed: Vec<InvariantViolation> = [$(($inv::holds(state), $inv::NAME)),+]
                    .into_iter()
                    .filter(|(ok, _)| !ok)
                    .map(|(_, name)| InvariantViolation(name))
                    .collect();
                if failed.is_empty() { Ok(()) } else { Err(failed) }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Everything [`Game`](crate::Game) guarantees between moves.
pub type GameInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    HistoryConsistentInvariant,
);
