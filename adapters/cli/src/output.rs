//! Backends writing a rendered frame to a byte sink.

use std::io::Write;

use anyhow::{Context, Result};
use choropleth_rendering::{format_value, paint_svg, MapFrame, RenderingBackend};

/// Writes the frame as an aligned text table.
pub(crate) struct TableBackend<W> {
    writer: W,
}

impl<W: Write> TableBackend<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RenderingBackend for TableBackend<W> {
    fn present(&mut self, frame: &MapFrame) -> Result<()> {
        writeln!(
            self.writer,
            "{} {} ({} scale)",
            frame.year, frame.mode, frame.scale
        )?;
        writeln!(self.writer, "{:<6}{:<6}{:>10}  COLOR", "STATE", "FIPS", "VALUE")?;
        for region in &frame.regions {
            writeln!(
                self.writer,
                "{:<6}{:<6}{:>10}  {}",
                region.state.as_str(),
                region.fips.as_str(),
                format_value(region.value),
                region.color
            )?;
        }
        self.writer.flush().context("failed to flush table output")
    }
}

/// Writes the frame as pretty-printed JSON.
pub(crate) struct JsonBackend<W> {
    writer: W,
}

impl<W: Write> JsonBackend<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> RenderingBackend for JsonBackend<W> {
    fn present(&mut self, frame: &MapFrame) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, frame)
            .context("failed to serialize map frame")?;
        writeln!(self.writer)?;
        self.writer.flush().context("failed to flush JSON output")
    }
}

/// Paints the frame into an SVG template.
pub(crate) struct SvgBackend<W> {
    template: String,
    writer: W,
}

impl<W: Write> SvgBackend<W> {
    pub(crate) fn new(template: String, writer: W) -> Self {
        Self { template, writer }
    }
}

impl<W: Write> RenderingBackend for SvgBackend<W> {
    fn present(&mut self, frame: &MapFrame) -> Result<()> {
        let painted = paint_svg(&self.template, frame);
        self.writer
            .write_all(painted.as_bytes())
            .context("failed to write painted SVG")?;
        self.writer.flush().context("failed to flush SVG output")
    }
}
