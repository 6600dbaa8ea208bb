//! `mapdocs` generates a README for every Dungeondraft `.dd2vtt` export
//! found under a directory tree.
//!
//! The work happens in three stages: [`docgen::discover`](mod@docgen::discover) walks the tree,
//! [`docgen::page`] renders a document from each map, and
//! [`docgen::writer`] places it next to the map. [`docgen::Generator`]
//! drives all three with the failure policy from [`config`].

pub mod cli;
pub mod config;
pub mod docgen;
pub mod error;
pub mod observability;
