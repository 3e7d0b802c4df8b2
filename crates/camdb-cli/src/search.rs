//! One-shot search command: query, sort, print.

use std::io::Write;

use anyhow::Context;
use camdb_core::CameraRecord;
use camdb_store::{CameraLoader, CameraService};

/// Stable ascending sort by camera number; equal numbers keep source order.
pub(crate) fn sort_by_number(cameras: &mut [CameraRecord]) {
    cameras.sort_by_key(|c| c.number);
}

/// `NUMBER | CODE NAME | LAT | LON`
pub(crate) fn format_line(camera: &CameraRecord) -> String {
    format!(
        "{} | {} {} | {} | {}",
        camera.number, camera.code, camera.name, camera.latitude, camera.longitude
    )
}

/// Search `term`, write matching cameras to `out` sorted by number, and
/// return how many were written.
///
/// # Errors
///
/// Returns an error if the camera source cannot be loaded or `out` fails.
pub(crate) async fn run_search<L, W>(
    service: &CameraService<L>,
    term: &str,
    out: &mut W,
) -> anyhow::Result<usize>
where
    L: CameraLoader,
    W: Write,
{
    let mut cameras = service
        .search(term)
        .await
        .context("failed to load cameras")?;
    sort_by_number(&mut cameras);

    for camera in &cameras {
        writeln!(out, "{}", format_line(camera))?;
    }
    out.flush()?;

    tracing::debug!(term, results = cameras.len(), "search finished");
    Ok(cameras.len())
}

/// Process exit status when nothing matched, or usage was printed.
pub(crate) const EXIT_NO_MATCHES: u8 = 0;
/// Process exit status when at least one camera matched.
pub(crate) const EXIT_MATCHES: u8 = 1;
/// Process exit status when the camera source could not be loaded.
pub(crate) const EXIT_LOAD_FAILED: u8 = 2;

/// Runs one CLI invocation and returns its exit status.
///
/// A missing or blank term prints `usage` to `out` and is not an error.
/// Load failures are reported on `err`.
pub(crate) async fn run<L, W, E>(
    service: &CameraService<L>,
    term: Option<&str>,
    usage: &str,
    out: &mut W,
    err: &mut E,
) -> u8
where
    L: CameraLoader,
    W: Write,
    E: Write,
{
    let Some(term) = term.filter(|t| !t.trim().is_empty()) else {
        if let Err(e) = writeln!(out, "{usage}") {
            tracing::warn!(error = %e, "failed to print usage");
        }
        return EXIT_NO_MATCHES;
    };

    match run_search(service, term, out).await {
        Ok(0) => EXIT_NO_MATCHES,
        Ok(_) => EXIT_MATCHES,
        Err(e) => {
            if let Err(write_err) = writeln!(err, "error: {e:#}") {
                tracing::warn!(error = %write_err, "failed to report error");
            }
            EXIT_LOAD_FAILED
        }
    }
}
