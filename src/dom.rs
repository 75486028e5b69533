use anyhow::anyhow;
use map_core::style::Declaration;
use map_core::Transform;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`. `None` when nothing matches or the
/// selector itself is invalid.
pub fn select(document: &web::Document, selector: &str) -> Option<web::Element> {
    let found = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::error!("[dom] invalid selector '{}': {:?}", selector, e);
            return None;
        }
    };
    if found.length() > 1 {
        log::warn!(
            "[dom] selector '{}' matched {} elements; using the first",
            selector,
            found.length()
        );
    }
    found.item(0).and_then(|n| n.dyn_into::<web::Element>().ok())
}

/// Create an element with the given class list and optional id.
pub fn create(
    document: &web::Document,
    tag: &str,
    class_name: &str,
    id: Option<&str>,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class_name);
    if let Some(id) = id {
        el.set_id(id);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("<{}> is not an HTML element", tag))
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append child: {:?}", e))
}

pub fn set_styles(el: &web::HtmlElement, declarations: &[Declaration]) -> anyhow::Result<()> {
    let style = el.style();
    for (prop, value) in declarations {
        style
            .set_property(prop, value)
            .map_err(|e| anyhow!("set {}: {:?}", prop, e))?;
    }
    Ok(())
}

fn stylable(target: &web::Element) -> anyhow::Result<&web::HtmlElement> {
    target
        .dyn_ref::<web::HtmlElement>()
        .ok_or_else(|| anyhow!("can't apply transform on non DOM element '{}'", target.tag_name()))
}

/// Overwrite the element's `transform` with the full operation list.
/// An identity transform removes the property.
pub fn apply_transform(target: &web::Element, transform: &Transform) -> anyhow::Result<()> {
    if transform.is_identity() {
        return clear_transform(target);
    }
    stylable(target)?
        .style()
        .set_property("transform", &transform.to_css())
        .map_err(|e| anyhow!("set transform: {:?}", e))
}

pub fn clear_transform(target: &web::Element) -> anyhow::Result<()> {
    stylable(target)?
        .style()
        .remove_property("transform")
        .map(|_| ())
        .map_err(|e| anyhow!("clear transform: {:?}", e))
}
