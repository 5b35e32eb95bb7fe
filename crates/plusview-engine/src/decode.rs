//! Decoding encoded images into drawables.
//!
//! Raster formats go through `image` with format sniffing; SVG (plain or
//! gzip-compressed) is rasterized at its intrinsic size with `resvg`.
//!
//! Decoding is blocking work. Callers on the UI thread that care about frame
//! latency should decode elsewhere and hand over a finished drawable.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::graphics::{Bitmap, DrawableRef};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reads `reader` to the end and decodes the bytes into a bitmap drawable.
pub fn decode_drawable(mut reader: impl Read) -> Result<DrawableRef> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).context("reading image stream")?;
    decode_bitmap(&bytes).map(DrawableRef::bitmap)
}

/// Opens and decodes the file at `path`, logging and returning `None` on any
/// failure.
pub fn decode_path(path: impl AsRef<Path>) -> Option<DrawableRef> {
    let path = path.as_ref();
    let result = File::open(path)
        .with_context(|| format!("opening {}", path.display()))
        .and_then(|f| decode_drawable(BufReader::new(f)));

    match result {
        Ok(d) => Some(d),
        Err(e) => {
            log::warn!("unable to decode image at {}: {e:#}", path.display());
            None
        }
    }
}

/// Decodes an in-memory encoded image.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap> {
    if bytes.starts_with(&GZIP_MAGIC) || looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }

    let image = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("sniffing image format")?
        .decode()
        .context("decoding raster image")?;
    Ok(Bitmap::new(image.to_rgba8()))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    (text.starts_with("<?xml") || text.starts_with("<svg") || text.starts_with("<!--"))
        && text.contains("<svg")
}

fn rasterize_svg(bytes: &[u8]) -> Result<Bitmap> {
    // `from_data` unpacks svgz itself.
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default()).context("parsing SVG")?;
    let size = tree.size().to_int_size();

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .context("SVG has an empty canvas")?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied pixels; bitmaps are straight alpha.
    let mut out = RgbaImage::new(size.width(), size.height());
    for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(Bitmap::new(out))
}
