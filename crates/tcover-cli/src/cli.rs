//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use tcover::consts::{DEFAULT_FONT_SIZE, DEFAULT_OUTPUT, MAX_FONT_SIZE};
use tcover::types::{Color, CoverStyle, RenderRequest};

/// Render a title cover image (900×1600 JPEG)
#[derive(Parser, Debug)]
#[command(name = "tcover")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example:\n  tcover \"美院学生都在用AI？我就笑了\" \"副标题\" -o cover.jpg")]
pub struct Cli {
    /// Main title text
    pub title: String,

    /// Optional subtitle, drawn in corner brackets below the title
    pub subtitle: Option<String>,

    /// Output file path
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Font size in pixels (1 to 1000)
    #[arg(
        short = 's',
        long = "font-size",
        default_value_t = DEFAULT_FONT_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FONT_SIZE))
    )]
    pub font_size: u32,

    /// Background color (#RRGGBB or r,g,b)
    #[arg(long = "background", default_value_t = Color::PAPER)]
    pub background: Color,

    /// Text color (#RRGGBB or r,g,b)
    #[arg(long = "text-color", default_value_t = Color::BLACK)]
    pub text_color: Color,

    /// Accent bar color (#RRGGBB or r,g,b)
    #[arg(long = "accent", default_value_t = Color::ACCENT)]
    pub accent: Color,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn style(&self) -> CoverStyle {
        CoverStyle {
            font_size: self.font_size,
            background: self.background,
            text: self.text_color,
            accent: self.accent,
        }
    }

    pub fn request(&self) -> RenderRequest {
        RenderRequest::new(self.title.clone())
            .with_subtitle(self.subtitle.clone().unwrap_or_default())
            .with_output(self.output.clone())
            .with_style(self.style())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
