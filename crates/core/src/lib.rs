#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! Core library for the greeter CLI.
//!
//! `greeter_core` provides:
//! - the language-keyed greeting table via [`greetings`]
//! - the fixed demonstration sequence via [`demo`]
//! - shared output and configuration types via [`types`]
//!
//! # Quick Start
//!
//! ```
//! use greeter_core::demo::run;
//! use greeter_core::types::{DemoConfig, OutputFormat};
//!
//! # fn demo() -> anyhow::Result<()> {
//! let mut out = Vec::new();
//! run(&mut out, &DemoConfig::default(), OutputFormat::Plain)?;
//! let text = String::from_utf8(out)?;
//! assert_eq!(text.lines().last(), Some("Hello world!"));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod demo;
pub mod greetings;
pub mod types;
