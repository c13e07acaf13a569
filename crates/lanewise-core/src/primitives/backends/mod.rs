//! Backend implementations of the primitive contract
//!
//! Only the portable scalar backend ships with the crate. Register-backed
//! backends plug in the same way: implement [`Primitives`](super::Primitives)
//! for their array type and opt into the higher-level traits.

pub mod scalar;
