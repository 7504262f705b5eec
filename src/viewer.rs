//! Viewing sessions: one renderer applied to a sequence of inputs.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::raster::ImageSource;
use crate::render::{self, FrameRenderer};
use crate::settings::Settings;
use crate::terminal;

/// Shows images from files, stacks and URLs with shared settings.
pub struct Viewer {
    settings: Settings,
    renderer: FrameRenderer,
}

impl Viewer {
    pub fn new(settings: Settings) -> Self {
        let renderer = FrameRenderer::new(&settings.render);
        Self { settings, renderer }
    }

    /// Stop rendering at the next row once `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.renderer = self.renderer.with_cancel(flag);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Output width in glyph columns.
    pub fn columns(&self) -> u32 {
        self.settings.columns.unwrap_or_else(terminal::columns)
    }

    /// Render an already decoded source.
    pub fn show_source<W: Write>(&self, source: &ImageSource, out: &mut W) -> Result<()> {
        render::show(
            source,
            self.settings.window,
            self.columns(),
            self.settings.render.resample,
            &self.renderer,
            out,
        )
    }

    /// Decode and render an image file.
    pub fn show_file<W: Write>(&self, path: impl AsRef<Path>, out: &mut W) -> Result<()> {
        let source = ImageSource::open(path, &self.settings.bands)?;
        self.show_source(&source, out)
    }

    /// Render band 1 of three images as red, green and blue.
    pub fn show_stack<P: AsRef<Path>, W: Write>(&self, paths: &[P], out: &mut W) -> Result<()> {
        let source = ImageSource::stacked(paths)?;
        self.show_source(&source, out)
    }

    /// Download, decode and render a remote image.
    pub async fn show_url<W: Write>(
        &self,
        fetcher: &Fetcher,
        url: &str,
        out: &mut W,
    ) -> Result<()> {
        let bytes = fetcher.fetch(url).await?;
        let source = ImageSource::from_bytes(&bytes, &self.settings.bands)?;
        self.show_source(&source, out)
    }
}
