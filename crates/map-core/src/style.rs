use crate::config::PiecesConfig;
use crate::constants::SEAM_BLUR_PX;
use crate::transform::fmt_css_number;

/// One inline style declaration, `(property, value)`.
pub type Declaration = (&'static str, String);

/// Styles shared by the left and right halves of every pane.
pub fn half_style(pieces: &PiecesConfig) -> Vec<Declaration> {
    let aspect = &pieces.aspect;
    vec![
        ("background-color", aspect.background.clone()),
        (
            "box-shadow",
            format!("inset 0 0 {}px {}", fmt_css_number(SEAM_BLUR_PX), aspect.seams),
        ),
        ("width", format!("{}px", fmt_css_number(pieces.width))),
        ("height", format!("{}px", fmt_css_number(pieces.height))),
    ]
}

pub fn shadow_style(pieces: &PiecesConfig) -> Vec<Declaration> {
    vec![("background-color", pieces.aspect.shadow.clone())]
}

/// Serialize declarations for a `style=""` attribute.
pub fn to_inline(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|(prop, value)| format!("{prop}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
