//! # Wolflog Types
//!
//! Data model for parsed Werewolf game transcripts.
//!
//! A [`GameLog`] owns its players and rounds, every [`Round`] owns its phases
//! and every [`Phase`] owns an ordered list of [`PhaseEntry`] values. The
//! serialized form is the display-ready JSON document consumed by renderers.

pub mod action;
pub mod game;
pub mod latest;

pub use action::*;
pub use game::*;
pub use latest::*;
