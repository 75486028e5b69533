//! Per-render transform plan.
//!
//! [`plan`] turns a configuration into the full set of transforms for one
//! render pass: the container, and for every pane its group and both halves.
//! The front-ends only write the resulting strings into the DOM.
//!
//! Container composition order: `translateX(compensation / 2)`, then
//! `rotateY`, `rotateZ`, `rotateX`.

use crate::config::PaperConfig;
use crate::geometry::{calculate, Geometry};
use crate::transform::{Axis, Transform};

#[derive(Clone, Debug, PartialEq)]
pub struct PanePlan {
    pub index: usize,
    pub group: Transform,
    pub left: Transform,
    pub right: Transform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub geometry: Geometry,
    pub container: Transform,
    pub panes: Vec<PanePlan>,
    /// Running sum of `i * offset` over all panes.
    pub compensation: f64,
}

/// Middle element(s) of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Center {
    Single(usize),
    Pair(usize, usize),
}

impl Center {
    #[inline]
    pub fn contains(self, index: usize) -> bool {
        match self {
            Center::Single(i) => i == index,
            Center::Pair(a, b) => a == index || b == index,
        }
    }
}

/// Center index (odd length) or the two middle indices (even length).
/// `None` for an empty sequence.
#[inline]
pub fn center(len: usize) -> Option<Center> {
    match len {
        0 => None,
        n if n % 2 == 0 => Some(Center::Pair(n / 2 - 1, n / 2)),
        n => Some(Center::Single(n / 2)),
    }
}

/// Compute every transform for one render of `config`. Pure; the derived
/// fields of `config` are not touched (see [`PaperConfig::apply_geometry`]).
pub fn plan(config: &PaperConfig) -> LayoutPlan {
    let geometry = calculate(&config.pieces, &config.map);
    let fold = config.map.fold_angle;
    let offset = geometry.offset;

    let mut compensation = 0.0;
    let panes = (0..config.pieces.amount)
        .map(|i| {
            let shift = i as f64 * offset;
            compensation += shift;
            PanePlan {
                index: i,
                group: Transform::new().translate(Axis::X, -shift),
                left: Transform::new().rotate(Axis::Y, -fold),
                right: Transform::new().rotate(Axis::Y, fold),
            }
        })
        .collect::<Vec<_>>();

    debug_assert!(
        (compensation - geometry.total_compensation(panes.len())).abs()
            <= 1e-9 * compensation.abs().max(1.0)
    );

    let rot = config.map.rotation;
    let container = Transform::new()
        .translate(Axis::X, compensation / 2.0)
        .rotate(Axis::Y, rot.y)
        .rotate(Axis::Z, rot.z)
        .rotate(Axis::X, rot.x);

    log::debug!(
        "[layout] panes={} offset={:.3} compensation={:.3}",
        panes.len(),
        offset,
        compensation
    );

    LayoutPlan {
        geometry,
        container,
        panes,
        compensation,
    }
}

impl LayoutPlan {
    #[inline]
    pub fn center(&self) -> Option<Center> {
        center(self.panes.len())
    }
}
