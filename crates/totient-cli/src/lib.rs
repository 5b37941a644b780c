//! # totient-cli
//!
//! CLI report rendering, styled output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliReportPresenter;
