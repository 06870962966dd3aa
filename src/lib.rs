//! Heterogeneous tagged tree with first-match search by tag.
//!
//! Layers, leaf first: [`domain`] (values, nodes, tree, builder),
//! [`application`] (search loop), [`infrastructure`] (console input, RNG),
//! [`config`] (layered settings) and [`cli`] (clap surface and dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
