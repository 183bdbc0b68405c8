//! # unpin-core
//!
//! Parsing and filtering for Yarn Berry lockfiles, built for dropping the
//! pinned resolutions of indirect dependencies so that `yarn install` can
//! recompute them.
//!
//! The document model is deliberately shallow: a lockfile is an ordered list
//! of top-level entries whose record bodies are kept as opaque verbatim
//! blocks. Only the resolution keys are interpreted.
#![deny(clippy::all)]
pub mod error;
pub mod ident;
pub mod lockfile;
pub mod parse;
