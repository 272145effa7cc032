//! Arena-backed text tree for the file viewer's line container.
//!
//! The root stands for the container element itself; its direct element
//! children are the displayed lines. Detached nodes stay in the arena until
//! [`TextContainer::compact`] drops them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String, classes: Vec<String> },
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContainer {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for TextContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContainer {
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element {
                tag: "div".to_string(),
                classes: Vec::new(),
            },
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// One `div` line per entry, each holding a single text node.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut container = Self::new();
        for line in lines {
            container.append_line(line.as_ref());
        }
        container
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn append_line(&mut self, text: &str) -> NodeId {
        let line = self.append_element(self.root, "div", &[]);
        if !text.is_empty() {
            self.append_text(line, text);
        }
        line
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        self.create_node(
            Some(parent),
            NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                classes: classes.iter().map(|c| (*c).to_string()).collect(),
            },
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.create_node(Some(parent), NodeKind::Text(text.to_string()))
    }

    fn create_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            kind,
        });
        if let Some(parent_id) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent_id.0) {
                parent_node.children.push(id);
            }
        }
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        matches!(
            self.kind(id),
            Some(NodeKind::Element { classes, .. }) if classes.iter().any(|c| c == class)
        )
    }

    /// Direct element children of the root, in display order.
    pub fn lines(&self) -> Vec<NodeId> {
        self.children(self.root)
            .iter()
            .copied()
            .filter(|id| matches!(self.kind(*id), Some(NodeKind::Element { .. })))
            .collect()
    }

    /// Position of `line` among [`Self::lines`].
    pub fn line_index(&self, line: NodeId) -> Option<usize> {
        self.lines().iter().position(|id| *id == line)
    }

    /// The line element that contains `node`, if any.
    pub fn line_of(&self, node: NodeId) -> Option<NodeId> {
        let mut cursor = node;
        loop {
            let parent = self.parent(cursor)?;
            if parent == self.root {
                return Some(cursor);
            }
            cursor = parent;
        }
    }

    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(NodeKind::Element { .. }) => {
                for child in self.children(id) {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    /// Attached descendants of `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Attached elements carrying `class`, in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// Replaces `target` with `replacements`, in order, inside its parent.
    /// Returns false when `target` is detached.
    pub(crate) fn replace_with_nodes(&mut self, target: NodeId, replacements: &[NodeId]) -> bool {
        let Some(parent) = self.parent(target) else {
            return false;
        };

        for id in replacements {
            if let Some(old_parent) = self.parent(*id) {
                if let Some(node) = self.nodes.get_mut(old_parent.0) {
                    node.children.retain(|child| child != id);
                }
            }
            if let Some(node) = self.nodes.get_mut(id.0) {
                node.parent = Some(parent);
            }
        }

        let Some(position) = self
            .children(parent)
            .iter()
            .position(|child| *child == target)
        else {
            return false;
        };
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children
                .splice(position..=position, replacements.iter().copied());
        }
        if let Some(node) = self.nodes.get_mut(target.0) {
            node.parent = None;
        }
        true
    }

    /// Removes the element `wrapper` and puts its children in its place.
    pub(crate) fn unwrap_element(&mut self, wrapper: NodeId) -> Option<NodeId> {
        let parent = self.parent(wrapper)?;
        let children = self.children(wrapper).to_vec();
        if !self.replace_with_nodes(wrapper, &children) {
            return None;
        }
        if let Some(node) = self.nodes.get_mut(wrapper.0) {
            node.children.clear();
        }
        Some(parent)
    }

    pub(crate) fn create_detached_text(&mut self, text: &str) -> NodeId {
        self.create_node(None, NodeKind::Text(text.to_string()))
    }

    pub(crate) fn create_detached_element(&mut self, tag: &str, classes: &[&str]) -> NodeId {
        self.create_node(
            None,
            NodeKind::Element {
                tag: tag.to_string(),
                classes: classes.iter().map(|c| (*c).to_string()).collect(),
            },
        )
    }

    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    /// Merges runs of adjacent text children of `parent` and drops empty ones.
    pub(crate) fn merge_adjacent_text(&mut self, parent: NodeId) {
        let children = self.children(parent).to_vec();
        let mut kept: Vec<NodeId> = Vec::with_capacity(children.len());
        let mut pending: Option<(NodeId, String)> = None;

        for child in children {
            let text = match self.kind(child) {
                Some(NodeKind::Text(text)) => Some(text.clone()),
                _ => None,
            };
            match text {
                Some(text) => {
                    match pending.as_mut() {
                        Some((_, buffer)) => {
                            buffer.push_str(&text);
                            if let Some(node) = self.nodes.get_mut(child.0) {
                                node.parent = None;
                            }
                        }
                        None => pending = Some((child, text)),
                    }
                }
                None => {
                    self.flush_text(&mut pending, &mut kept);
                    kept.push(child);
                }
            }
        }
        self.flush_text(&mut pending, &mut kept);

        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children = kept;
        }
    }

    fn flush_text(&mut self, pending: &mut Option<(NodeId, String)>, kept: &mut Vec<NodeId>) {
        let Some((id, text)) = pending.take() else {
            return;
        };
        match self.nodes.get_mut(id.0) {
            Some(node) if !text.is_empty() => {
                node.kind = NodeKind::Text(text);
                kept.push(id);
            }
            Some(node) => node.parent = None,
            None => {}
        }
    }

    /// Drops every node unreachable from the root and renumbers the rest in
    /// document order. Ids handed out before the call are invalidated.
    pub(crate) fn compact(&mut self) {
        let mut order = vec![self.root];
        order.extend(self.descendants(self.root));

        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        for (new_index, old) in order.iter().enumerate() {
            if let Some(slot) = remap.get_mut(old.0) {
                *slot = Some(NodeId(new_index));
            }
        }
        let lookup = |id: NodeId| remap.get(id.0).copied().flatten();

        let mut old_nodes: Vec<Option<Node>> = std::mem::take(&mut self.nodes)
            .into_iter()
            .map(Some)
            .collect();
        self.nodes = order
            .iter()
            .filter_map(|old| old_nodes.get_mut(old.0).and_then(Option::take))
            .map(|node| Node {
                parent: node.parent.and_then(lookup),
                children: node.children.into_iter().filter_map(lookup).collect(),
                kind: node.kind,
            })
            .collect();
        self.root = NodeId(0);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Serialised inner markup of the container.
    pub fn markup(&self) -> String {
        self.inner_markup(self.root)
    }

    pub fn inner_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_markup(*child, &mut out);
        }
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            Some(NodeKind::Text(text)) => out.push_str(&escape_text(text)),
            Some(NodeKind::Element { tag, classes }) => {
                out.push('<');
                out.push_str(tag);
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape_attr(&classes.join(" ")));
                    out.push('"');
                }
                out.push('>');
                for child in self.children(id) {
                    self.write_markup(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            None => {}
        }
    }
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
