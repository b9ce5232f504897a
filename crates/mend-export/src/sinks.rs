use std::io::Write;

use mend_core::collaborators::PresentationSink;
use mend_core::models::record::ReviewEntry;

use crate::error::ExportError;
use crate::render::render_dashboard;
use crate::styles::DashboardStyles;
use crate::table::render_table;

pub const DEFAULT_TITLE: &str = "Recovery Monitoring Dashboard";

/// Writes the HTML dashboard to any writer.
pub struct HtmlDashboard<W> {
    writer: W,
    title: String,
    styles: DashboardStyles,
}

impl<W: Write> HtmlDashboard<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            title: DEFAULT_TITLE.to_string(),
            styles: DashboardStyles::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_styles(mut self, styles: DashboardStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for HtmlDashboard<W> {
    type Error = ExportError;

    fn present(&mut self, entries: &[ReviewEntry]) -> Result<(), Self::Error> {
        let html = render_dashboard(&self.title, entries, &self.styles)?;
        self.writer.write_all(html.as_bytes())?;
        self.writer.flush()?;
        tracing::debug!(cards = entries.len(), bytes = html.len(), "dashboard written");
        Ok(())
    }
}

/// Writes the plain-text table to any writer.
pub struct TextDashboard<W> {
    writer: W,
}

impl<W: Write> TextDashboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for TextDashboard<W> {
    type Error = ExportError;

    fn present(&mut self, entries: &[ReviewEntry]) -> Result<(), Self::Error> {
        self.writer.write_all(render_table(entries).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
