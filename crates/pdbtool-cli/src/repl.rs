use crate::error::Result;
use pdbtool_core::workflows::session::Session;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Runs the interactive read-eval loop until `quit` or end of input.
///
/// Input bytes that are not valid UTF-8 are replaced rather than rejected, so
/// such a line is handled like any other unrecognized command.
pub fn run<R: BufRead, W: Write>(
    session: &Session,
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> Result<()> {
    write!(output, "{}", session.banner())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            info!("End of input reached, leaving session.");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        debug!(input = %line.trim_end(), "Read command line.");

        let Some(outcome) = session.handle_line(&line) else {
            continue;
        };
        write!(output, "{}", outcome.report())?;
        output.flush()?;
        if outcome.is_quit() {
            break;
        }
    }
    Ok(())
}
