use std::fs::OpenOptions;
use std::io::Write;

use color_eyre::Result;
use env_logger::{Env, Target};

use crate::config::{DEFAULT_LOG_FILTER, LOG_FILE_PATH};

/// Routes `log` output to a file; the terminal belongs to the TUI.
pub fn init() -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_PATH)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}: {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(())
}
