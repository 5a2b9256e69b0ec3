//! Prints a fixed set of values in dotted form.
//!
//! Run with: cargo run --bin print_ip

use serde_ipfmt::{to_writer, Result};
use std::collections::LinkedList;
use std::io::{self, Write};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();

    let stdout = io::stdout();
    report(run(&mut stdout.lock()));
}

/// Logs a failed run to stderr. The exit status stays success either way.
fn report(result: Result<()>) {
    if let Err(err) = result {
        tracing::error!("{}", err);
    }
}

fn run<W: Write>(out: &mut W) -> Result<()> {
    // Integer scalars
    to_writer(&mut *out, &-1_i8)?;
    to_writer(&mut *out, &0_i16)?;
    to_writer(&mut *out, &2130706433_i32)?;
    to_writer(&mut *out, &8875824491850138409_i64)?;

    // Text
    to_writer(&mut *out, &String::from("1.2.3.4.5.6.7.8.99"))?;

    // Sequences of integers
    to_writer(&mut *out, &vec![0x012345, 0x987654, 0x112233])?;
    to_writer(&mut *out, &vec![0x11_u8, 0x22, 0x33, 0x44])?;
    to_writer(
        &mut *out,
        &[0x012345, 0x987654, 0x112233]
            .into_iter()
            .collect::<LinkedList<i32>>(),
    )?;
    to_writer(
        &mut *out,
        &[
            75824491850138409_i64,
            75824491850138408,
            75824491850138410,
            75824491850138407,
        ]
        .into_iter()
        .collect::<LinkedList<_>>(),
    )?;

    // Sequence of strings
    to_writer(&mut *out, &vec!["91", "82", "73", "214"])?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_ipfmt::Error;
    use std::sync::{Arc, Mutex};

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_prints_every_line() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "255",
                "0.0",
                "127.0.0.1",
                "123.45.67.89.101.112.131.41",
                "1.2.3.4.5.6.7.8.99",
                "74565.9991764.1122867",
                "17.34.51.68",
                "74565.9991764.1122867",
                "75824491850138409.75824491850138408.75824491850138410.75824491850138407",
                "91.82.73.214",
            ]
        );
    }

    #[test]
    fn test_run_stops_at_failing_sink() {
        let err = run(&mut Closed).unwrap_err();
        assert_eq!(err, Error::Io("stdout closed".to_string()));
    }

    #[test]
    fn test_report_logs_failure_and_returns() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .without_time()
            .with_target(false)
            .with_level(false)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || report(run(&mut Closed)));

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("IO error: stdout closed"));
    }

    #[test]
    fn test_report_is_silent_on_success() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || report(run(&mut io::sink())));

        assert!(captured.0.lock().unwrap().is_empty());
    }
}
