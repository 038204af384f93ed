//! Artist-side forms.
//!
//! Each form turns its input into a request body ([`FormPayload`] for
//! multipart, serde types for JSON) after local presence checks.

mod account;
mod artwork;
mod dossier;
mod payload;

pub use account::*;
pub use artwork::*;
pub use dossier::*;
pub use payload::*;
