mod code;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use color_lib::Palette;
use svg::Document;
use thiserror::Error;
use tracing::{debug, info};

pub use code::{make_document, SIZE};

pub const OUTPUT_FILE: &str = "memora_eva_icon.svg";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const PNG_NAME: &str = "icon_1024.png";
const RESIZE_SCRIPT: &str = "./fix_appicon.sh";
const CONVERTER_URL: &str = "https://cloudconvert.com/svg-to-png";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "icon-emitter",
    author,
    version,
    about = "Write the Memora EVA app icon as an SVG file",
    long_about = None
)]
pub struct Cli {
    /// Where to write the icon
    #[arg(long, value_name = "OUTPUT_FILE", default_value = OUTPUT_FILE)]
    pub output: PathBuf,
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write icon to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The document as written to disk: XML declaration, then the `<svg>` root.
pub fn render(document: &Document) -> String {
    format!("{}\n{}\n", XML_DECLARATION, document)
}

/// Truncates `path` and writes the rendered document in one go. Returns the
/// number of bytes written.
pub fn save_svg<T>(path: T, document: &Document) -> Result<usize, EmitError>
where
    T: AsRef<Path>,
{
    let path = path.as_ref();
    let content = render(document);
    debug!(bytes = content.len(), "rendered icon");

    let write_error = |source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(content.as_bytes()).map_err(write_error)?;

    Ok(content.len())
}

/// Prints where the icon went and the manual steps that turn it into app icons.
pub fn report<W: Write>(out: &mut W, output: &Path, location: &Path) -> io::Result<()> {
    writeln!(out, "✅ EVA 主题图标已生成！")?;
    writeln!(out, "📁 文件位置: {}", location.display())?;
    writeln!(out)?;
    writeln!(out, "📋 后续步骤：")?;
    writeln!(out, "1. 在浏览器中打开 {} 预览效果", output.display())?;
    writeln!(out, "2. 使用在线工具或设计软件导出为 {SIZE}x{SIZE} PNG")?;
    writeln!(out, "   推荐工具: {}", CONVERTER_URL)?;
    writeln!(out, "3. 将导出的 PNG 重命名为 {}", PNG_NAME)?;
    writeln!(out, "4. 运行脚本生成所有尺寸: {}", RESIZE_SCRIPT)?;
    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    let document = make_document(&Palette::EVA);
    let bytes = save_svg(&cli.output, &document)?;

    let location = std::path::absolute(&cli.output)
        .with_context(|| format!("failed to resolve '{}'", cli.output.display()))?;
    info!(path = %location.display(), bytes, "icon written");

    report(&mut io::stdout().lock(), &cli.output, &location)?;
    Ok(())
}
