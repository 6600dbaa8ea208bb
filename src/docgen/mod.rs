//! Documentation generation for dd2vtt battlemaps.
//!
//! The work is split into three stages:
//! - [`discover`](mod@discover): lazily enumerate map files under a root
//! - [`map`], [`title`], [`page`]: decode a map and render its page (pure)
//! - [`writer`]: write the page next to the map
//!
//! [`pipeline`] drives the stages over a whole tree; [`thumbnail`] renders
//! preview images from the same map files.

pub mod discover;
pub mod map;
pub mod page;
pub mod pipeline;
pub mod thumbnail;
pub mod title;
pub mod writer;

pub use discover::{MapPaths, discover};
pub use map::{MapFile, MapResolution, parse_map};
pub use page::{MapPage, render_page};
pub use pipeline::{Batch, FileOutcome, Generator, RunSummary, run_batch};
pub use title::{title_from_path, titlecase};
pub use writer::{WriteStatus, output_path, write_document};
