//! Reveal animation model.
//!
//! The page script and this module implement the same machine:
//!
//! ```text
//! Idle -> Collecting -> Scheduled -(settle)-> Running -(duration)-> Done
//!             |
//!             +-> Idle (no rects)
//! ```
//!
//! [`state::RevealState`] is the pure part (`advance(state, now) -> state`), and
//! [`animator::Animator`] applies its output to a [`animator::RevealHost`].

pub mod animator;
pub mod ease;
pub mod schedule;
pub mod state;
