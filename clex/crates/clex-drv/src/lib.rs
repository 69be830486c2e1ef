//! clex-drv - Driver for the clex scanner
//!
//! Loads a source file, scans it with [`clex_lex`], and writes a token
//! report. The `clex` binary is a thin command-line layer over
//! [`Session`].
//!
//! # Example
//!
//! ```no_run
//! use clex_drv::{Config, Options, Outcome, Session};
//!
//! let options = Options::from_config("example_code.c", &Config::default());
//! let session = Session::new(options)?;
//! if let Outcome::Reported { path, .. } = session.run(&mut std::io::stdout())? {
//!     println!("Successfully created {}", path.display());
//! }
//! # Ok::<(), clex_drv::ClexError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod report;
pub mod session;

pub use config::Config;
pub use error::{ClexError, Result};
pub use report::ReportFormat;
pub use session::{run_file, Options, Outcome, Session};
