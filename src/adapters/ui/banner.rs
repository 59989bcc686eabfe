//! Startup banner: figlet "CLASSIFIER" shaded left to right, then the backend line.

use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};
use tracing::debug;

const TEAL: [u8; 3] = [0x0b, 0x7a, 0x75];
const AMBER: [u8; 3] = [0xf2, 0xa5, 0x41];

/// Column `step` of `steps` on the teal-to-amber ramp.
fn shade(step: usize, steps: usize) -> Color {
    let span = steps.saturating_sub(1).max(1);
    let step = step.min(span);
    let mix = |a: u8, b: u8| {
        let (a, b) = (a as usize, b as usize);
        ((a * (span - step) + b * step + span / 2) / span) as u8
    };
    Color::Rgb {
        r: mix(TEAL[0], AMBER[0]),
        g: mix(TEAL[1], AMBER[1]),
        b: mix(TEAL[2], AMBER[2]),
    }
}

/// Figlet art for `text`, or the plain text if the font is unavailable.
fn render_art(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| text.to_string())
}

fn write_banner(out: &mut impl Write, base_url: &str) -> io::Result<()> {
    let art = render_art("CLASSIFIER");
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(1);
    for line in art.lines() {
        for (col, ch) in line.chars().enumerate() {
            queue!(out, PrintStyledContent(ch.with(shade(col, width))))?;
        }
        queue!(out, Print("\r\n"))?;
    }
    let tagline = format!("v{}  backend: {}", env!("CARGO_PKG_VERSION"), base_url);
    queue!(out, PrintStyledContent(tagline.with(shade(width, width))), Print("\r\n"))?;
    out.flush()
}

/// Prints the banner to stdout. A broken terminal only loses the banner.
pub fn print_welcome(base_url: &str) {
    if let Err(e) = write_banner(&mut stdout(), base_url) {
        debug!(error = %e, "banner not printed");
    }
}
