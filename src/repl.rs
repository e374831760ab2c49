//! Read-eval-print loop
//!
//! Reads one line at a time, runs it to completion, and prints the reply.
//! Command errors are printed and the loop continues; only `exit` or the
//! end of input stops it. Bytes that are not valid UTF-8 are replaced
//! rather than ending the session.

use std::future::Future;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::commands::Dispatcher;

pub const PROMPT: &str = "Pokedex > ";

/// Runs the REPL over `reader` and `writer` until exit or end of input.
pub async fn run<R, W>(dispatcher: &mut Dispatcher, mut reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            writer.write_all(b"\n").await?;
            break;
        }
        let line = decode_line(&buf);

        let reply = match dispatcher.dispatch(&line).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, input = %line, "Command failed");
                writer.write_all(format!("{}\n", err).as_bytes()).await?;
                continue;
            }
        };

        for line in &reply.lines {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        if reply.quit {
            break;
        }
    }

    writer.flush().await
}

/// Runs the REPL like [`run`], but returns as soon as `shutdown` completes.
///
/// A pending read is abandoned when `shutdown` wins.
pub async fn run_until<R, W, F>(
    dispatcher: &mut Dispatcher,
    reader: R,
    writer: W,
    shutdown: F,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    F: Future<Output = ()>,
{
    tokio::select! {
        result = run(dispatcher, reader, writer) => result,
        _ = shutdown => {
            info!("Shutdown requested, leaving the REPL");
            Ok(())
        }
    }
}

fn decode_line(buf: &[u8]) -> String {
    let mut end = buf.len();
    while end > 0 && matches!(buf[end - 1], b'\n' | b'\r') {
        end -= 1;
    }
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ExpiringCache;
    use crate::client::PokeApiClient;
    use crate::commands::CommandTable;
    use crate::session::Session;
    use std::time::Duration;

    fn dispatcher() -> Dispatcher {
        let client =
            PokeApiClient::new("http://127.0.0.1:9", 20, Duration::from_secs(1)).unwrap();
        let session = Session::new(client, ExpiringCache::new(Duration::from_secs(60)));
        Dispatcher::new(CommandTable::standard(), session)
    }

    async fn run_script(script: &str) -> String {
        let mut dispatcher = dispatcher();
        let mut output = Vec::new();
        run(&mut dispatcher, script.as_bytes(), &mut output).await.unwrap();
        dispatcher.into_session().shutdown().await;
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_exit_stops_reading() {
        let output = run_script("exit\nhelp\n").await;

        assert_eq!(output, "Pokedex > Closing the Pokedex... Goodbye!\n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_does_not_end_the_session() {
        let mut dispatcher = dispatcher();
        let mut output = Vec::new();
        let script: &[u8] = b"help \xff\xfe\nmapb\r\nexit\n";
        run(&mut dispatcher, script, &mut output).await.unwrap();
        dispatcher.into_session().shutdown().await;
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Usage:"));
        assert!(output.contains("you're on the first page\n"));
        assert!(output.ends_with("Closing the Pokedex... Goodbye!\n"));
    }

    #[test]
    fn test_decode_line_strips_line_endings() {
        assert_eq!(decode_line(b"map\r\n"), "map");
        assert_eq!(decode_line(b"catch\xffx\n"), "catch\u{fffd}x");
        assert_eq!(decode_line(b""), "");
    }

    #[tokio::test]
    async fn test_run_until_returns_on_shutdown_while_reading() {
        let mut dispatcher = dispatcher();
        // Holding the other end open keeps the read pending forever
        let (_stdin_writer, stdin) = tokio::io::duplex(64);
        let mut output = Vec::new();

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            run_until(
                &mut dispatcher,
                tokio::io::BufReader::new(stdin),
                &mut output,
                tokio::time::sleep(Duration::from_millis(10)),
            ),
        )
        .await;

        assert!(result.is_ok(), "run_until should stop once shutdown fires");
        assert!(result.unwrap().is_ok());
        assert_eq!(output, PROMPT.as_bytes());
        dispatcher.into_session().shutdown().await;
    }

    #[tokio::test]
    async fn test_errors_do_not_stop_the_loop() {
        let output = run_script("dig\n\nmapb\n").await;

        assert_eq!(
            output,
            "Pokedex > Unknown command: dig\n\
             Pokedex > \
             Pokedex > you're on the first page\n\
             Pokedex > \n"
        );
    }
}
