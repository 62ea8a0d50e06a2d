use bmpline::{Background, Color, Error, PixelFormat, RenderConfig, RowOrder};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bmpline")]
#[command(version)]
#[command(about = "Draw a line over a gradient and save it as a BMP", long_about = None)]
pub struct Args {
    /// Endpoints as X1 Y1 X2 Y2, y measured from the bottom (prompted on stdin if omitted)
    #[arg(
        num_args = 4,
        value_names = ["X1", "Y1", "X2", "Y2"],
        allow_negative_numbers = true
    )]
    pub coords: Option<Vec<i32>>,

    /// Output BMP file
    #[arg(short, long, default_value = "line.bmp")]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value = "256", value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value = "256", value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Bits per pixel
    #[arg(long, value_enum, default_value_t = BitsArg::Bgr24)]
    pub bits: BitsArg,

    /// Background fill
    #[arg(short, long, value_enum, default_value_t = BackgroundArg::Gradient)]
    pub background: BackgroundArg,

    /// Line color: a name, r,g,b or #rrggbb
    #[arg(short, long, default_value = "white")]
    pub color: Color,

    /// Store rows bottom-up (positive height) instead of top-down
    #[arg(long)]
    pub bottom_up: bool,

    /// Program used to open the written file
    #[arg(long, value_name = "CMD")]
    pub viewer: Option<String>,

    /// Don't open the written file
    #[arg(long)]
    pub no_view: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundArg {
    Gradient,
    White,
    Black,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsArg {
    #[value(name = "24")]
    Bgr24,
    #[value(name = "32")]
    Bgra32,
}

impl From<BitsArg> for PixelFormat {
    fn from(arg: BitsArg) -> Self {
        match arg {
            BitsArg::Bgr24 => PixelFormat::Bgr24,
            BitsArg::Bgra32 => PixelFormat::Bgra32,
        }
    }
}

impl From<BackgroundArg> for Background {
    fn from(arg: BackgroundArg) -> Self {
        match arg {
            BackgroundArg::Gradient => Background::Gradient,
            BackgroundArg::White => Background::Solid(Color::WHITE),
            BackgroundArg::Black => Background::Solid(Color::BLACK),
        }
    }
}

impl Args {
    pub fn render_config(&self) -> bmpline::Result<RenderConfig> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }

        Ok(RenderConfig {
            width: self.width,
            height: self.height,
            format: self.bits.into(),
            background: self.background.into(),
            line_color: self.color,
            row_order: if self.bottom_up {
                RowOrder::BottomUp
            } else {
                RowOrder::TopDown
            },
        })
    }
}
