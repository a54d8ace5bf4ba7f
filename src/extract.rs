use scraper::{ElementRef, Node};

/// Collects the trimmed, non-empty text nodes below `root` in document order.
///
/// The root itself is not a text node, so only its descendants contribute.
/// Traversal keeps an explicit stack instead of recursing, children are pushed
/// in reverse so the first child is visited before its siblings.
pub fn text_fragments(root: ElementRef) -> Vec<String> {
    let mut fragments = vec![];
    let mut stack: Vec<_> = root.children().rev().collect();

    while let Some(node) = stack.pop() {
        if let Node::Text(text) = node.value() {
            let text = text.trim();
            if !text.is_empty() {
                fragments.push(text.to_string());
            }
        }
        stack.extend(node.children().rev());
    }

    fragments
}
