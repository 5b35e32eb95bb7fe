//! Renders one image through `ImageViewPlus`, releases its bitmap and renders
//! again to show the fallback.
//!
//! ```text
//! plusview-viewer [URI_OR_PATH]
//! ```
//!
//! Without an argument a generated gradient is shown.

use std::rc::Rc;

use anyhow::{Context, Result};
use plusview_engine::graphics::{Rgba, RgbaImage};
use plusview_engine::logging::{init_logging, LoggingConfig};
use plusview_engine::scene::{DrawCmd, DrawList};
use plusview_ui::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(320.0, 240.0);

const DEFAULT_RES: ResourceId = ResourceId(1);
const FRAME_RES: ResourceId = ResourceId(2);
const GRADIENT_RES: ResourceId = ResourceId(3);
const CONTENT_LAYER: u32 = 10;
const FRAME_COLOR: Color = Color { r: 0.08, g: 0.08, b: 0.1, a: 1.0 };

const LAYOUT: &str = "
    // the avatar frame used by the viewer
    ImageViewPlus [default_drawable=1, layer_drawable=2, content_layer=10, scale_type=top_crop]
";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let gradient = gradient(64, 96);
    let resources = ResourceTable::new()
        .with_bitmap(DEFAULT_RES, Bitmap::solid(32, 32, [128, 128, 128, 255]))
        .with_bitmap(GRADIENT_RES, gradient.clone())
        .with(FRAME_RES, || {
            DrawableRef::layers(
                LayerComposite::new()
                    .with_layer(None, DrawableRef::shape(ShapeDrawable::rect(FRAME_COLOR)))
                    .with_layer(Some(LayerId(CONTENT_LAYER)), DrawableRef::shape(ShapeDrawable::default())),
            )
        });
    let resolver = SourceResolver::new(Rc::new(resources), Rc::new(FileContentAccess));

    let attrs = parse_attributes(LAYOUT).context("parsing viewer layout")?;
    let mut view = ImageViewPlus::with_attributes(&attrs, resolver)?;
    view.set_listener(|v| {
        log::info!("listener: reset to default (showing default: {})", v.is_showing_default());
    });

    match std::env::args().nth(1) {
        Some(arg) => view.set_image_uri(Some(Uri::parse(arg))),
        None => view.set_image_resource(GRADIENT_RES),
    }

    if view.is_showing_default() {
        log::warn!("content could not be loaded; the default drawable is shown");
    }

    // Keep a handle to whatever bitmap ends up in the content slot.
    let content = view
        .displayed_drawable()
        .and_then(|d| d.as_bitmap().cloned())
        .unwrap_or(gradient);

    let mut root = Element::new(view);
    let mut scene = UiScene::new();

    log::info!("frame 1");
    report(scene.frame(&mut root, VIEWPORT));

    content.recycle();

    log::info!("frame 2 (content bitmap released)");
    report(scene.frame(&mut root, VIEWPORT));

    Ok(())
}

fn report(list: &DrawList) {
    for item in list.in_paint_order() {
        match &item.cmd {
            DrawCmd::Image(cmd) => log::info!(
                "  image {}x{} -> {:?} (clip {:?})",
                cmd.bitmap.width(),
                cmd.bitmap.height(),
                cmd.dest_rect(),
                item.clip_rect,
            ),
            DrawCmd::Rect(cmd) => log::info!("  rect {:?} {:?}", cmd.rect, cmd.color),
        }
    }
}

fn gradient(width: u32, height: u32) -> Bitmap {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgba([r, g, 160, 255])
    });
    Bitmap::new(pixels)
}
