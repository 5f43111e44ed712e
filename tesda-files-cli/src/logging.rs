//! Logger setup for CLI output.
//!
//! Normal output goes through `log::info!` and is printed without decoration.
//! Warnings and errors get a colored prefix; debug and trace lines carry a
//! timestamp and level. `RUST_LOG` overrides the level chosen by flags.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(quiet: bool, verbose: u8) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                level,
                record.args()
            ),
        });

    // A logger may already be installed (e.g. in tests).
    let _ = builder.try_init();
}
