//! Render command implementation
//!
//! One drawer, one run, one file. The batch command funnels every job
//! through [`RenderJob::run`] as well.

use std::io::{self, Read};
use std::path::PathBuf;

use fontdrawer::prelude::*;
use fontdrawer_export::save;

use crate::cli::RenderArgs;

/// Everything needed to produce one image, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    pub text: String,
    pub font: PathBuf,
    pub width: u32,
    pub height: u32,
    pub size: Option<f32>,
    pub dpi: f32,
    pub hinting: Hinting,
    pub color: Color,
    pub format: ExportFormat,
    pub output: PathBuf,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl RenderJob {
    /// Face parameters this job draws with
    pub fn face_params(&self) -> FaceParams {
        FaceParams::DEFAULT
            .with_size(self.size.unwrap_or_else(|| default_size(self.width, &self.text)))
            .with_dpi(self.dpi)
            .with_hinting(self.hinting)
            .with_color(self.color)
    }

    /// Draw the text and write the image to `self.output`
    pub fn run(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DrawerError::ConfigError(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }

        let config = DrawerConfig::new(&self.font, self.width, self.height)
            .with_face(self.face_params());
        let mut drawer = fontdrawer::open(&config)?;

        drawer.append_content(&self.text);
        place(&mut drawer, self.x, self.y);
        drawer.draw();

        let exporter = self.format.exporter();
        save(exporter.as_ref(), drawer.canvas(), &self.output)?;

        log::info!(
            "Drew {} codes at {}pt into {}",
            drawer.content().len(),
            drawer.face_params().size,
            self.output.display()
        );
        Ok(())
    }
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let format: ExportFormat = args.format.into();
    let job = RenderJob {
        text,
        font: args.font.clone(),
        width: args.width,
        height: args.height,
        size: args.size,
        dpi: args.dpi,
        hinting: args.hinting.into(),
        color: parse_color(&args.color)?,
        format,
        output: args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("out.{}", format))),
        x: args.x,
        y: args.y,
    };

    job.run()?;
    eprintln!("Wrote {}", job.output.display());
    Ok(())
}

/// Set the origin from optional pixel coordinates; a missing axis is centered
pub fn place(drawer: &mut Drawer, x: Option<f32>, y: Option<f32>) {
    match (x, y) {
        (Some(x), Some(y)) => drawer.set_position(F26Dot6::from_float(x), F26Dot6::from_float(y)),
        (None, Some(y)) => drawer.set_center_x_keep_y(F26Dot6::from_float(y)),
        (Some(x), None) => drawer.set_center_y_keep_x(F26Dot6::from_float(x)),
        (None, None) => drawer.set_position_center(),
    }
}

/// Fill the canvas width: one em per character
pub fn default_size(width: u32, text: &str) -> f32 {
    match text.chars().count() {
        0 => FaceParams::DEFAULT.size,
        n => width as f32 / n as f32,
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

/// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
pub fn parse_color(color_str: &str) -> Result<Color> {
    let hex = color_str.trim_start_matches('#');
    let invalid = || DrawerError::ConfigError(format!("invalid color '{}'", color_str));

    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(DrawerError::ConfigError(
            "Color must be in RRGGBB or RRGGBBAA format".into(),
        ));
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Ok(Color::rgba(r, g, b, a))
}
