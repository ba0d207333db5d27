use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};
use log::Level;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Copies every log line to stderr and to a second sink.
struct TeeWriter<W: Write> {
    sink: W,
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write_all(buf)?;
        // Console echo is best effort.
        let _ = io::stderr().write_all(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.sink.flush()
    }
}

fn format_line(
    out: &mut impl Write,
    timestamp: DateTime<Local>,
    level: Level,
    args: &std::fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(
        out,
        "{} - {} - {}",
        timestamp.format(TIMESTAMP_FORMAT),
        level,
        args
    )
}

fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Applies the line format and routes output to stderr plus `sink`.
fn configure<W>(builder: &mut Builder, sink: W) -> &mut Builder
where
    W: Write + Send + 'static,
{
    builder
        .format(|buf, record| format_line(buf, Local::now(), record.level(), record.args()))
        .target(Target::Pipe(Box::new(TeeWriter { sink })))
}

/// Installs the process-wide logger. `RUST_LOG` overrides the default `error` filter.
pub fn init(error_log: &Path) -> io::Result<()> {
    let file = open_log(error_log)?;
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));

    configure(&mut builder, file)
        .try_init()
        .map_err(io::Error::other)
}


#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::TimeZone;
    use log::{LevelFilter, Log, Record};

    use super::*;

    #[test]
    fn line_has_timestamp_level_and_message() {
        let timestamp = Local.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap();
        let mut out = Vec::new();

        format_line(
            &mut out,
            timestamp,
            Level::Error,
            &format_args!("Exchange rates not found in API response for {}", "17.10.2026"),
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2026-10-17 09:05:03,000 - ERROR - Exchange rates not found in API response for 17.10.2026\n"
        );
    }

    #[test]
    fn tee_keeps_everything_in_sink() {
        let mut tee = TeeWriter { sink: Vec::new() };

        tee.write_all(b"first\n").unwrap();
        tee.write_all(b"second\n").unwrap();
        tee.flush().unwrap();

        assert_eq!(tee.sink, b"first\nsecond\n");
    }

    #[test]
    fn error_lines_are_appended_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.log");
        fs::write(&path, "earlier run\n").unwrap();

        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Error);
        let logger = configure(&mut builder, open_log(&path).unwrap()).build();

        logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("HTTP error occurred: {}", "https://example.test"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("Collected 2 of 3 days"))
                .build(),
        );
        logger.flush();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].ends_with(" - ERROR - HTTP error occurred: https://example.test"));
    }
}
