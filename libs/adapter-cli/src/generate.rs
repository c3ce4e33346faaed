//! Command implementations.

use std::fs;
use std::path::Path;

use adapter_mesh::export::{adapter_file_name, collar_file_names};
use adapter_mesh::section::cross_section;
use adapter_mesh::text::{BlockOutliner, TextOutliner};
use adapter_mesh::{
    compose_adapter, compose_collars, export_stl, AdapterParams, AssembledBody, GenerationSettings,
    MeshError, TextMode,
};
use anyhow::{Context, Result};
use glam::DVec3;
use tracing::{info, warn};

use crate::CommonArgs;

impl CommonArgs {
    fn params(&self, length: f64) -> AdapterParams {
        AdapterParams {
            relief_depth: self.relief_depth,
            segments: self.segments,
            text_mode: self.text,
            ..AdapterParams::new(self.base_diameter, self.top_diameter, self.thickness, length)
        }
    }

    fn outliner(&self, mode: TextMode) -> Result<Option<Box<dyn TextOutliner>>> {
        if !mode.is_enabled() {
            return Ok(None);
        }
        match &self.font {
            Some(path) => load_font(path).map(Some),
            None => {
                info!("no font given, lettering uses block glyphs");
                Ok(Some(Box::new(BlockOutliner::default())))
            }
        }
    }
}

#[cfg(feature = "font")]
fn load_font(path: &Path) -> Result<Box<dyn TextOutliner>> {
    let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    let outliner = adapter_mesh::text::FontOutliner::new(bytes)
        .with_context(|| format!("loading font {}", path.display()))?;
    Ok(Box::new(outliner))
}

#[cfg(not(feature = "font"))]
fn load_font(path: &Path) -> Result<Box<dyn TextOutliner>> {
    anyhow::bail!("font support is disabled in this build, cannot use {}", path.display())
}

/// Runs `compose`; when only the lettering failed, logs it and runs again
/// without text.
fn with_text_fallback<T>(
    settings: &GenerationSettings,
    mut outliner: Option<Box<dyn TextOutliner>>,
    compose: impl Fn(&GenerationSettings, Option<&mut dyn TextOutliner>) -> Result<T, MeshError>,
) -> Result<T, MeshError> {
    let outliner = outliner.as_mut().map(|o| o as &mut dyn TextOutliner);
    match compose(settings, outliner) {
        Err(err) if err.is_text_only() => {
            warn!(%err, "dropping lettering");
            let bare = GenerationSettings {
                text_mode: TextMode::None,
                ..*settings
            };
            compose(&bare, None)
        }
        result => result,
    }
}

pub fn body(args: &CommonArgs, length: f64, section: Option<&Path>) -> Result<()> {
    let params = args.params(length);
    let dims = params.dimensions()?;
    let settings = params.settings()?;
    let outliner = args.outliner(settings.text_mode)?;

    let body = with_text_fallback(&settings, outliner, |settings, outliner| {
        compose_adapter(&dims, length, settings, outliner)
    })?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let path = args
        .output
        .join(adapter_file_name(params.base_diameter, params.top_diameter));
    write(&body, &path, args)?;

    if let Some(svg_path) = section {
        // Export frame: the XZ plane contains the axis
        match cross_section(&body.mesh, DVec3::ZERO, DVec3::Y) {
            Some(section) => {
                fs::write(svg_path, section.to_svg())
                    .with_context(|| format!("writing {}", svg_path.display()))?;
                info!(path = %svg_path.display(), perimeter = section.perimeter, "wrote section");
            }
            None => warn!("section plane misses the adapter"),
        }
    }
    Ok(())
}

pub fn collars(args: &CommonArgs, length: f64) -> Result<()> {
    let params = args.params(length);
    let dims = params.dimensions()?;
    let settings = params.settings()?;
    let outliner = args.outliner(settings.text_mode)?;

    let pair = with_text_fallback(&settings, outliner, |settings, outliner| {
        compose_collars(&dims, length, settings, outliner)
    })?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let [base_name, top_name] = collar_file_names(&dims);
    write(&pair.base, &args.output.join(base_name), args)?;
    write(&pair.top, &args.output.join(top_name), args)?;
    Ok(())
}

fn write(body: &AssembledBody, path: &Path, args: &CommonArgs) -> Result<()> {
    export_stl(&body.mesh, path, args.format)
        .with_context(|| format!("exporting {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}
