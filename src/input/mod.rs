use anyhow::{bail, Context, Result};
use bmpline::Point;
use std::io::BufRead;

/// Two endpoints in the caller's bottom-up coordinate convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    fn from_values(values: &[i32]) -> Result<Self> {
        match *values {
            [x1, y1, x2, y2] => Ok(Self {
                start: Point::new(x1, y1),
                end: Point::new(x2, y2),
            }),
            _ => bail!("Expected 4 coordinates (x1 y1 x2 y2), got {}", values.len()),
        }
    }
}

pub trait InputSource {
    fn read_segment(&mut self) -> Result<Segment>;
}

/// Coordinates given on the command line
pub struct ArgsSource {
    values: Vec<i32>,
}

impl ArgsSource {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }
}

impl InputSource for ArgsSource {
    fn read_segment(&mut self) -> Result<Segment> {
        Segment::from_values(&self.values)
    }
}

/// Reads four whitespace-separated integers, across as many lines as needed
pub struct StdinReader<R> {
    reader: R,
}

impl<R: BufRead> StdinReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for StdinReader<R> {
    fn read_segment(&mut self) -> Result<Segment> {
        let mut values = Vec::with_capacity(4);
        let mut line = String::new();

        while values.len() < 4 {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read coordinates from stdin")?;
            if read == 0 {
                bail!(
                    "Unexpected end of input: expected 4 coordinates, got {}",
                    values.len()
                );
            }

            for token in line.split_whitespace() {
                if values.len() == 4 {
                    break;
                }
                let value = token
                    .parse::<i32>()
                    .with_context(|| format!("Invalid coordinate '{}'", token))?;
                values.push(value);
            }
        }

        Segment::from_values(&values)
    }
}
