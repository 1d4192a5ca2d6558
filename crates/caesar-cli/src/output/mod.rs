use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Destination for everything a command prints on stdout.
///
/// Commands receive this explicitly so tests can capture output in a buffer.
pub struct Output<W: Write = io::Stdout> {
    out: W,
    format: OutputFormat,
}

impl Output<io::Stdout> {
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> Output<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Print a serializable response in the configured JSON format.
    pub fn json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let rendered = render(value, self.format)?;
        writeln!(self.out, "{rendered}")?;
        Ok(())
    }

    /// Print one line of human-readable text and flush it.
    pub fn line(&mut self, text: impl Display) -> anyhow::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Pass bytes through untouched.
    pub fn raw(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Output, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_indented() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        assert!(out.contains("\n  \"id\": \"x\""));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn null_renders_as_null() {
        let out = render(&Option::<u8>::None, OutputFormat::Json).expect("render");
        assert_eq!(out, "null");
    }

    #[test]
    fn output_sink_collects_lines_and_json() {
        let mut out = Output::new(Vec::new(), OutputFormat::Raw);
        out.line("[12:00:00] Searching...").expect("line");
        out.json(&Example { id: "y", value: 1 }).expect("json");
        out.raw(b"data: x\n\n").expect("raw");

        let text = String::from_utf8(out.into_inner()).expect("utf8");
        assert_eq!(
            text,
            "[12:00:00] Searching...\n{\"id\":\"y\",\"value\":1}\ndata: x\n\n"
        );
    }
}
