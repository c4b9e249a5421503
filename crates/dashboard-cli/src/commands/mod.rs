//! CLI 명령어 구현 모듈.

pub mod panels;
pub mod render;
pub mod source;

pub use panels::{run_index, run_options, run_show, run_trading, PanelKind, RangeArgs, Report};
pub use render::OutputFormat;
pub use source::{build_source, SourceArgs};
