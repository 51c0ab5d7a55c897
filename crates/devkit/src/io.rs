use anyhow::{Context, Result};
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

pub const STDIN_MARKER: &str = "-";

pub async fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read stdin")?;
    Ok(input)
}

/// Read a file, or stdin for `-` / no path
pub async fn read_source(path: Option<&str>) -> Result<String> {
    match path {
        None | Some(STDIN_MARKER) => read_stdin().await,
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path)),
    }
}

/// Write to stdout, ending with a newline.
///
/// A closed pipe (e.g. `| head -n 1`) is not an error.
pub async fn write_output(text: &str) -> Result<()> {
    let mut writer = io::stdout();

    let mut buf = text.to_string();
    if !buf.ends_with('\n') {
        buf.push('\n');
    }

    if let Err(e) = writer.write_all(buf.as_bytes()).await {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(e.into());
    }

    if let Err(e) = writer.flush().await {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(e.into());
        }
    }

    Ok(())
}
