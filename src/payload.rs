// JSON payloads exchanged with the host page.
// Kept free of web-sys so host tests can include it directly.

use anyhow::Context;
use map_core::{LayoutPlan, PaperOptions};
use serde::Serialize;

/// Decode widget options from the JSON text of a JS value.
/// Absent, `null` and `undefined` payloads decode to `None`.
pub fn options_from_json(text: Option<&str>) -> anyhow::Result<Option<PaperOptions>> {
    match text.map(str::trim) {
        None | Some("") | Some("null") | Some("undefined") => Ok(None),
        Some(t) => serde_json::from_str::<PaperOptions>(t)
            .map(Some)
            .context("invalid paper map options"),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupTransforms {
    pub group: String,
    pub left: String,
    pub right: String,
}

/// CSS transform strings of one render, as written to the DOM.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanTransforms {
    pub container: String,
    pub groups: Vec<GroupTransforms>,
}

impl From<&LayoutPlan> for PlanTransforms {
    fn from(plan: &LayoutPlan) -> Self {
        Self {
            container: plan.container.to_css(),
            groups: plan
                .panes
                .iter()
                .map(|p| GroupTransforms {
                    group: p.group.to_css(),
                    left: p.left.to_css(),
                    right: p.right.to_css(),
                })
                .collect(),
        }
    }
}

pub fn plan_to_json(plan: &LayoutPlan) -> anyhow::Result<String> {
    serde_json::to_string(&PlanTransforms::from(plan)).context("serialize transforms")
}
