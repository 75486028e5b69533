use map_core::constants::*;
use map_core::style::{half_style, shadow_style};
use map_core::{center, plan, LayoutPlan, PaperConfig, PaperOptions};
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::dom;
use crate::payload;

/// Convert any error into a thrown JS `Error`.
pub(crate) fn to_js(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&format!("{e:#}")).into()
}

fn options_from_js(value: &JsValue) -> Result<Option<PaperOptions>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let text = js_sys::JSON::stringify(value)?.as_string();
    payload::options_from_json(text.as_deref()).map_err(to_js)
}

struct PaneNodes {
    group: web::HtmlElement,
    left: web::HtmlElement,
    right: web::HtmlElement,
    shadow: web::HtmlElement,
}

/// Generated structure: `.map > .map-group > (.map-piece-left, .map-piece-right, .map-piece-shadow)`.
struct MapNodes {
    map: web::HtmlElement,
    panes: Vec<PaneNodes>,
}

impl MapNodes {
    fn build(
        document: &web::Document,
        container: &web::Element,
        config: &PaperConfig,
    ) -> anyhow::Result<Self> {
        let pieces = &config.pieces;
        let map = dom::create(document, "div", CLASS_MAP, None)?;
        let half = half_style(pieces);
        let shadow_decl = shadow_style(pieces);
        let middle = center(pieces.amount);

        let mut panes = Vec::with_capacity(pieces.amount);
        for i in 0..pieces.amount {
            let group_class = match middle {
                Some(c) if c.contains(i) => format!("{CLASS_GROUP} {CLASS_GROUP_CENTER}"),
                _ => CLASS_GROUP.to_string(),
            };
            let group = dom::create(document, "div", &group_class, None)?;
            let left = dom::create(document, "div", CLASS_PIECE_LEFT, None)?;
            let right = dom::create(document, "div", CLASS_PIECE_RIGHT, None)?;
            let shadow = dom::create(document, "div", CLASS_PIECE_SHADOW, None)?;

            dom::set_styles(&left, &half)?;
            dom::set_styles(&right, &half)?;
            dom::set_styles(&shadow, &shadow_decl)?;

            dom::append(&group, &left)?;
            dom::append(&group, &right)?;
            dom::append(&group, &shadow)?;
            dom::append(&map, &group)?;
            panes.push(PaneNodes {
                group,
                left,
                right,
                shadow,
            });
        }
        dom::append(container, &map)?;
        Ok(Self { map, panes })
    }

    fn apply(&self, plan: &LayoutPlan) -> anyhow::Result<()> {
        dom::apply_transform(&self.map, &plan.container)?;
        for (nodes, pane) in self.panes.iter().zip(&plan.panes) {
            dom::apply_transform(&nodes.left, &pane.left)?;
            dom::apply_transform(&nodes.right, &pane.right)?;
            dom::apply_transform(&nodes.group, &pane.group)?;
        }
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        dom::clear_transform(&self.map)?;
        for nodes in &self.panes {
            dom::clear_transform(&nodes.group)?;
            dom::clear_transform(&nodes.left)?;
            dom::clear_transform(&nodes.right)?;
            dom::clear_transform(&nodes.shadow)?;
        }
        Ok(())
    }

    fn remove(&self) {
        self.map.remove();
    }
}

/// Folded paper map mounted into the first element matching a selector.
#[wasm_bindgen]
pub struct PaperMap {
    selector: String,
    config: PaperConfig,
    nodes: Option<MapNodes>,
    last_plan: Option<LayoutPlan>,
}

impl PaperMap {
    fn mount(&mut self) -> bool {
        let Some(document) = dom::window_document() else {
            log::error!("[paper] no document available");
            return false;
        };
        let Some(container) = dom::select(&document, &self.selector) else {
            log::error!("[paper] no element found with the selector '{}'", self.selector);
            return false;
        };
        // Pane sizes are styled at build time, so derive them first.
        self.config.apply_geometry();
        match MapNodes::build(&document, &container, &self.config) {
            Ok(nodes) => {
                log::info!(
                    "[paper] mounted {} panes into '{}'",
                    nodes.panes.len(),
                    self.selector
                );
                self.nodes = Some(nodes);
                true
            }
            Err(e) => {
                log::error!("[paper] failed to build map: {:#}", e);
                false
            }
        }
    }
}

#[wasm_bindgen]
impl PaperMap {
    /// Throws on malformed or invalid options. A selector that matches
    /// nothing is logged and leaves the widget unmounted.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: JsValue) -> Result<PaperMap, JsValue> {
        let options = options_from_js(&options)?;
        let mut config = PaperConfig::from_options(options.as_ref()).map_err(to_js)?;
        // Derived fields are valid even if mounting fails below.
        config.apply_geometry();
        let mut paper = PaperMap {
            selector: selector.to_string(),
            config,
            nodes: None,
            last_plan: None,
        };
        paper.mount();
        Ok(paper)
    }

    /// Recompute the geometry and write every transform. Returns `false`
    /// when the widget is not mounted.
    pub fn render(&mut self) -> Result<bool, JsValue> {
        let Some(nodes) = &self.nodes else {
            log::warn!("[paper] render skipped: '{}' is not mounted", self.selector);
            return Ok(false);
        };
        self.config.apply_geometry();
        let plan = plan(&self.config);
        nodes.apply(&plan).map_err(to_js)?;
        log::debug!("[paper] container transform: {}", plan.container);
        self.last_plan = Some(plan);
        Ok(true)
    }

    /// Merge `options` over the current configuration, rebuild the DOM and
    /// render. Returns `false` without touching anything when no options are
    /// given; throws when they are malformed or invalid.
    pub fn update(&mut self, options: JsValue) -> Result<bool, JsValue> {
        let Some(options) = options_from_js(&options)? else {
            log::error!("[paper] update called without new options");
            return Ok(false);
        };
        let next = self.config.merged(&options).map_err(to_js)?;
        self.config = next;
        self.destroy();
        if !self.mount() {
            return Ok(false);
        }
        self.render()
    }

    /// Clear every transform written by `render`.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        if let Some(nodes) = &self.nodes {
            nodes.clear().map_err(to_js)?;
        }
        self.last_plan = None;
        Ok(())
    }

    /// Remove the generated structure from the page.
    pub fn destroy(&mut self) {
        if let Some(nodes) = self.nodes.take() {
            nodes.remove();
        }
        self.last_plan = None;
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.nodes.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.config.pieces.height
    }

    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> f64 {
        self.config.map.offset
    }

    #[wasm_bindgen(getter)]
    pub fn amount(&self) -> usize {
        self.config.pieces.amount
    }

    /// Current configuration as a plain object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        let text = serde_json::to_string(&self.config).map_err(to_js)?;
        js_sys::JSON::parse(&text)
    }

    /// Transforms written by the last render, or `null`.
    pub fn transforms(&self) -> Result<JsValue, JsValue> {
        match &self.last_plan {
            Some(plan) => {
                let text = payload::plan_to_json(plan).map_err(to_js)?;
                js_sys::JSON::parse(&text)
            }
            None => Ok(JsValue::NULL),
        }
    }
}
