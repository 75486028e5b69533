// Static HTML rendering of a layout plan.
// Kept free of I/O so host tests can include it directly.

use std::fmt::Write as _;

use map_core::constants::*;
use map_core::style::{half_style, shadow_style, to_inline};
use map_core::{center, LayoutPlan, PaperConfig};

/// Escape a value for a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn style_attr(transform: &str, extra: &str) -> String {
    let style = match (transform.is_empty(), extra.is_empty()) {
        (true, _) => extra.to_string(),
        (false, true) => format!("transform: {transform};"),
        (false, false) => format!("{extra} transform: {transform};"),
    };
    escape_attr(&style)
}

pub fn render_html(config: &PaperConfig, plan: &LayoutPlan) -> String {
    let half = to_inline(&half_style(&config.pieces));
    let shadow = escape_attr(&to_inline(&shadow_style(&config.pieces)));
    let middle = center(plan.panes.len());

    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>paper map preview</title></head>\n<body>\n");
    _ = writeln!(
        out,
        "<div class=\"{CLASS_MAP}\" style=\"{}\">",
        style_attr(&plan.container.to_css(), "")
    );
    for pane in &plan.panes {
        let class = match middle {
            Some(c) if c.contains(pane.index) => format!("{CLASS_GROUP} {CLASS_GROUP_CENTER}"),
            _ => CLASS_GROUP.to_string(),
        };
        _ = writeln!(
            out,
            "  <div class=\"{}\" style=\"{}\">",
            escape_attr(&class),
            style_attr(&pane.group.to_css(), "")
        );
        _ = writeln!(
            out,
            "    <div class=\"{CLASS_PIECE_LEFT}\" style=\"{}\"></div>",
            style_attr(&pane.left.to_css(), &half)
        );
        _ = writeln!(
            out,
            "    <div class=\"{CLASS_PIECE_RIGHT}\" style=\"{}\"></div>",
            style_attr(&pane.right.to_css(), &half)
        );
        _ = writeln!(
            out,
            "    <div class=\"{CLASS_PIECE_SHADOW}\" style=\"{shadow}\"></div>"
        );
        out.push_str("  </div>\n");
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}
