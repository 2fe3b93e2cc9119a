#![forbid(unsafe_code)]

//! Core: value types for the filmstrip layout engine.
//!
//! # Role in the filmstrip
//! `filmstrip-core` owns the small, copyable vocabulary every other crate
//! speaks: who is on the call ([`Participant`]), what the grid looks like
//! ([`GridShape`], [`TileRect`]), and where the pointer is
//! ([`PointerPosition`], [`ResizeAxis`]).
//!
//! # How it fits in the system
//! `filmstrip-layout` consumes these types in its pure planners and its drag
//! controller. `filmstrip-runtime` adapts host callbacks into them. Nothing in
//! this crate holds state or performs I/O; the host supplies fresh values on
//! every call.

pub mod geometry;
pub mod participant;
pub mod pointer;

pub use geometry::{GridShape, TileRect};
pub use participant::{Participant, ParticipantId, ParticipantRole};
pub use pointer::{PointerPosition, ResizeAxis};
