use std::io::{self, Write};

use storefront_core::ScreenView;

const BULLET: &str = "  - ";

/// Plain-text lines for the menu area.
pub(crate) fn render(view: &ScreenView) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.items.len() + 1);
    if let Some(notice) = view.notice {
        lines.push(notice.to_string());
    }
    lines.extend(view.items.iter().map(|item| format!("{BULLET}{item}")));
    lines
}

pub(crate) fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
