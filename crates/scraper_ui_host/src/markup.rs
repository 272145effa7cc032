//! Builds a [`TextContainer`] from rendered viewer markup.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use scraper_ui_core::{NodeId, TextContainer};
use ui_logging::ui_debug;

/// Id of the line container on the file viewer page.
pub const VIEWER_CONTAINER_ID: &str = "contentWithLineNumbers";

/// Finds the element with `container_id` in a full page and converts its
/// children. `None` means the page has no such container.
pub fn container_from_document(html: &str, container_id: &str) -> Option<TextContainer> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("#{container_id}")).ok()?;
    let Some(element) = document.select(&selector).next() else {
        ui_debug!("no #{} element in document", container_id);
        return None;
    };

    let mut container = TextContainer::new();
    let root = container.root();
    for child in element.children() {
        visit_node(child, &mut container, root);
    }
    Some(container)
}

/// Treats every top-level element of `html` as a line.
pub fn container_from_fragment(html: &str) -> TextContainer {
    let fragment = Html::parse_fragment(html);
    let mut container = TextContainer::new();
    let root = container.root();
    for child in fragment.root_element().children() {
        visit_node(child, &mut container, root);
    }
    container
}

/// One line element per line of `text`. A trailing newline does not add an empty line.
pub fn container_from_text(text: &str) -> TextContainer {
    TextContainer::from_lines(text.lines())
}

fn visit_node(node: NodeRef<'_, Node>, container: &mut TextContainer, parent: NodeId) {
    match node.value() {
        Node::Text(text) => {
            container.append_text(parent, text);
        }
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                visit_element(element, container, parent);
            }
        }
        _ => {}
    }
}

fn visit_element(element: ElementRef<'_>, container: &mut TextContainer, parent: NodeId) {
    let tag = element.value().name().to_ascii_lowercase();
    if matches!(tag.as_str(), "script" | "style" | "noscript" | "template") {
        return;
    }
    let classes: Vec<&str> = element.value().classes().collect();
    let id = container.append_element(parent, &tag, &classes);
    for child in element.children() {
        visit_node(child, container, id);
    }
}
