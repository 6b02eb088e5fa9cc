//! In-memory document model.
//!
//! The page the client manipulates is held as an explicit node arena rather
//! than a live browser DOM, so every update is testable headless. Nodes are
//! addressed by `NodeId` handles; detached subtrees stay in the arena and
//! simply become unreachable from the root.

/// Binary visibility of an element, in place of raw `style.display` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Visible,
    Hidden,
}

impl Display {
    /// The CSS display primitive this state maps to.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Visible => "block",
            Self::Hidden => "none",
        }
    }
}

/// Handle to a node in the document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: Display,
    /// Current value of a form control.
    value: String,
    /// `name` attribute of a form control.
    name: Option<String>,
    /// Raw markup substituted verbatim, never parsed.
    markup: Option<String>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            display: Display::Visible,
            value: String::new(),
            name: None,
            markup: None,
        }
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// The document: a node arena with a single root element.
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Element(Element::new("body")),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(tag)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            kind,
        });
        id
    }

    /// Append `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Remove `child` from `parent`'s child list. No-op if it is not a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.nodes[child.0].parent == Some(parent) {
            self.detach(child);
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    #[must_use]
    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].children.first().copied()
    }

    /// All nodes below `node` in document (depth-first) order.
    #[must_use]
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Text(_) => None,
        }
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.element_mut(node) {
            el.id = Some(id.to_string());
        }
    }

    #[must_use]
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.id.as_deref())
    }

    /// First element in document order whose id matches, if any.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.reachable()
            .into_iter()
            .find(|&n| self.element(n).is_some_and(|el| el.id.as_deref() == Some(id)))
    }

    /// Every element in document order carrying `class`.
    #[must_use]
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.reachable()
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    fn reachable(&self) -> Vec<NodeId> {
        let mut all = vec![self.root];
        all.extend(self.descendants(self.root));
        all
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        }
    }

    /// Replace the element's whole class list.
    pub fn set_classes(&mut self, node: NodeId, classes: &[&str]) {
        if let Some(el) = self.element_mut(node) {
            el.classes = classes.iter().map(ToString::to_string).collect();
        }
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    #[must_use]
    pub fn display(&self, node: NodeId) -> Display {
        self.element(node).map_or(Display::Visible, |el| el.display)
    }

    pub fn set_display(&mut self, node: NodeId, display: Display) {
        if let Some(el) = self.element_mut(node) {
            el.display = display;
        }
    }

    pub fn set_name(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.element_mut(node) {
            el.name = Some(name.to_string());
        }
    }

    #[must_use]
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.name.as_deref())
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.element_mut(node) {
            el.value = value.to_string();
        }
    }

    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |el| el.value.as_str())
    }

    /// Replace the element's inner content with raw markup, verbatim.
    /// Existing children are dropped; the markup string is never parsed.
    pub fn set_inner_markup(&mut self, node: NodeId, markup: &str) {
        let children: Vec<NodeId> = self.children(node).to_vec();
        for child in children {
            self.detach(child);
        }
        if let Some(el) = self.element_mut(node) {
            el.markup = Some(markup.to_string());
        }
    }

    #[must_use]
    pub fn inner_markup(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.markup.as_deref())
    }

    /// Concatenated text of the node's subtree, document order.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let NodeKind::Text(text) = &self.nodes[node.0].kind {
            out.push_str(text);
        }
        for id in self.descendants(node) {
            if let NodeKind::Text(text) = &self.nodes[id.0].kind {
                out.push_str(text);
            }
        }
        out
    }
}
