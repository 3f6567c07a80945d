//! Cantor: exact exists/forall search over infinite bit sequences
//!
//! Decides whether a predicate over an *infinite* sequence of bits is
//! satisfiable, by searching only finite prefixes and growing the prefix on
//! demand. A predicate never sees a whole sequence; it reads positions
//! through a [`BitView`] that may answer "unknown", and the engine grows its
//! search space to cover exactly the positions predicates actually ask for.
//!
//! The search is exact: it terminates with the right answer whenever the
//! predicate's outcome is determined by a finite prefix. On top of the core
//! [`for_some`] sit the universal dual [`for_every`], pairwise search
//! ([`for_every2`]), pointwise function equality ([`equal`]), and the
//! modulus of uniform continuity ([`modulus`]), the smallest prefix length
//! that fully determines a function's output.

pub mod combinators;
pub mod index_set;
pub mod num;
pub mod predicates;
pub mod search;
pub mod sequence;

pub use combinators::{equal, for_every2, least, modulus, prefix_eq};
pub use index_set::IndexSet;
pub use num::{Bit, Natural};
pub use search::{for_every, for_some};
pub use sequence::BitView;
