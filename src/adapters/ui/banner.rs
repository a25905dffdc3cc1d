//! Welcome banner: "MAIDEASY" in FIGlet, banded saffron, white and green
//! from top to bottom, followed by the supported languages.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

const TITLE: &str = "MAIDEASY";

const TAGLINE: &str = "Household messages in English, हिन्दी, தமிழ், తెలుగు, ಕನ್ನಡ";

/// Color stops, top row first.
const BANDS: [Color; 3] = [
    Color::Rgb { r: 0xff, g: 0x99, b: 0x33 },
    Color::Rgb { r: 0xf5, g: 0xf5, b: 0xf5 },
    Color::Rgb { r: 0x13, g: 0x88, b: 0x08 },
];

/// Band for row `row` of `rows`: the art is split into equal thirds, and
/// extra rows go to the upper bands.
fn band_for_row(row: usize, rows: usize) -> Color {
    let rows = rows.max(1);
    let index = (row * BANDS.len()) / rows;
    BANDS[index.min(BANDS.len() - 1)]
}

/// FIGlet art for the title; plain text when the font cannot be loaded.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Write the colored banner to `out`. Commands are queued and flushed once.
fn render<W: Write>(out: &mut W) -> io::Result<()> {
    let art = title_art();
    let rows: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();
    for (i, row) in rows.iter().enumerate() {
        queue!(
            out,
            SetForegroundColor(band_for_row(i, rows.len())),
            Print(row),
            Print("\r\n")
        )?;
    }
    queue!(
        out,
        ResetColor,
        Print(format!("v{}  {}\r\n", env!("CARGO_PKG_VERSION"), TAGLINE))
    )?;
    out.flush()
}

/// Print the welcome banner to stdout. A terminal that rejects colors only
/// loses the banner.
pub fn print_welcome() {
    if let Err(e) = render(&mut stdout()) {
        tracing::debug!(error = %e, "banner not printed");
    }
}
