//! Samplepack - sample packing assistant
//!
//! Samplepack helps an operator pack laboratory samples into grid-partitioned
//! storage boxes, optionally guided by spoken weight readings. The sample list
//! is imported from a spreadsheet, packed in order into fixed-capacity boxes,
//! and exported as a per-box packing map.
//!
//! ## Architecture
//!
//! - [`geometry`]: pure arithmetic between linear sample indices and
//!   box-and-row-separated grid cells.
//! - [`domain`]: the [`Sample`](domain::Sample) record plus the change-event
//!   types observers subscribe to.
//! - [`shipment`]: the ordered sample registry with its derived display grid
//!   and the next-unpacked-sample navigation query.
//! - [`voice`]: utterance classification (weight / command / noise) and the
//!   background listening session with its pause/resume latch.
//! - [`xlsx`]: spreadsheet import of the sample list and export of the
//!   packing map.
//! - [`config`]: TOML settings with defaults for every key.

pub mod cli;
pub mod config;
pub mod domain;
pub mod geometry;
pub mod shipment;
pub mod voice;
pub mod xlsx;

pub use domain::*;
