use blocktint_engine::HighlightSettings;
use ratatui::style::Color;

/// Used when a configured color string fails to parse; a bad color should
/// degrade to a visible neutral tint, not kill the pass.
const FALLBACK: Color = Color::Rgb(60, 60, 60);

/// One terminal color per visual level, in level order.
pub fn level_colors(settings: &HighlightSettings) -> Vec<Color> {
    settings
        .colors
        .iter()
        .map(|source| parse_rgba(source).unwrap_or(FALLBACK))
        .collect()
}

/// Parse an editor-style `rgba(r, g, b, a)` string into a terminal color.
///
/// Terminals have no alpha channel, so the alpha is blended toward the
/// assumed dark background by scaling each channel.
pub fn parse_rgba(source: &str) -> Option<Color> {
    let inner = source.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return None;
    }

    let r: f64 = parts[0].parse().ok()?;
    let g: f64 = parts[1].parse().ok()?;
    let b: f64 = parts[2].parse().ok()?;
    let a: f64 = parts[3].parse().ok()?;

    let a = a.clamp(0.0, 1.0);
    let channel = |v: f64| (v.clamp(0.0, 255.0) * a).round() as u8;
    Some(Color::Rgb(channel(r), channel(g), channel(b)))
}
