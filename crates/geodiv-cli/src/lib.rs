//! geodiv-cli
//! ==========
//!
//! Command-line interface for the `geodiv-core` administrative division
//! search. The binary (`geodiv`) is the primary deliverable; the library
//! target holds its argument definitions and text rendering so both can be
//! tested without spawning a process.
//!
//! Basic usage:
//!
//! ```text
//! geodiv --help
//! geodiv stats
//! geodiv search 朝阳 --type district
//! geodiv code 110105
//! geodiv list province
//! geodiv build data/info.json data/info.bin.gz
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod output;
