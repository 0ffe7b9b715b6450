//! Value objects - immutable types that represent domain concepts

mod party_size;

pub use party_size::PartySize;
