//! Export request types
//!
//! An [`ExportRequest`] fully determines one renderer invocation and the file it
//! is expected to produce.

use super::page::PageDescriptor;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the directory created next to each document for its exported pages
pub const OUTPUT_DIR_NAME: &str = "images";

/// Output file type understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpg,
    Svg,
    Vsdx,
    Xml,
}

impl ExportFormat {
    /// Value passed to the renderer and used as the output file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Svg => "svg",
            ExportFormat::Vsdx => "vsdx",
            ExportFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" => Ok(ExportFormat::Jpg),
            "svg" => Ok(ExportFormat::Svg),
            "vsdx" => Ok(ExportFormat::Vsdx),
            "xml" => Ok(ExportFormat::Xml),
            _ => Err(format!(
                "Invalid format '{s}'. Must be one of: png, jpg, svg, vsdx, xml"
            )),
        }
    }
}

/// Rendering options shared by every page of a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// 1 = 100%, 2 = 200%
    pub scale: f64,
    /// JPEG quality
    pub quality: u32,
    /// Border width around the diagram
    pub border: u32,
    /// Transparent background (PNG only)
    pub transparent: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            scale: 2.0,
            quality: 100,
            border: 0,
            transparent: false,
        }
    }
}

/// Everything needed to render one page of one document
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub document: PathBuf,
    pub page: PageDescriptor,
    pub options: ExportOptions,
    pub output_dir: PathBuf,
}

impl ExportRequest {
    pub fn new(
        document: impl Into<PathBuf>,
        page: PageDescriptor,
        options: ExportOptions,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            document: document.into(),
            page,
            options,
            output_dir: output_dir.into(),
        }
    }

    /// `<output_dir>/<document file name>_<page name>.<format>`
    pub fn output_path(&self) -> PathBuf {
        let mut file_name = OsString::new();
        if let Some(base) = self.document.file_name() {
            file_name.push(base);
        }
        file_name.push("_");
        file_name.push(&self.page.name);
        file_name.push(".");
        file_name.push(self.options.format.as_str());
        self.output_dir.join(file_name)
    }
}

/// Output directory for a document: `<document directory>/images`
pub fn output_dir_for(document: &Path) -> PathBuf {
    document
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(OUTPUT_DIR_NAME)
}
