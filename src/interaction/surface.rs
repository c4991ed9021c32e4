//! Interaction surface
//!
//! The inspectable projection of a rendered story: a flat list of nodes with
//! role, label, placeholder, and observable state. Scenario-bearing stories
//! provide a builder that mirrors their rendered widget tree; the runner
//! locates nodes and dispatches synthesized events against it.
//!
//! Event effects apply synchronously: once `dispatch` returns, the surface
//! reflects the full effect of the event.

use super::step::{InputEvent, Key, Locator, Predicate, Role};

/// Handle to a node within a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One interactive element of a rendered story
#[derive(Debug, Clone)]
pub struct Node {
    role: Role,
    label: Option<String>,
    placeholder: Option<String>,
    value: String,
    checked: bool,
    disabled: bool,
    visible: bool,
    activations: usize,
}

impl Node {
    fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            placeholder: None,
            value: String::new(),
            checked: false,
            disabled: false,
            visible: true,
            activations: 0,
        }
    }

    /// A button node with a visible label
    pub fn button(label: impl Into<String>) -> Self {
        Self::new(Role::Button).label(label)
    }

    /// An unchecked checkbox node
    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::new(Role::Checkbox).label(label)
    }

    /// An unchecked switch node
    pub fn switch(label: impl Into<String>) -> Self {
        Self::new(Role::Switch).label(label)
    }

    /// An empty text input node
    pub fn text_input() -> Self {
        Self::new(Role::TextInput)
    }

    /// Set the visible label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the initial text value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Mark the node as not visible
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Current text value
    pub fn current_value(&self) -> &str {
        &self.value
    }

    /// Current checked state
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Number of times the activation handler ran
    pub fn activation_count(&self) -> usize {
        self.activations
    }
}

/// Expected vs. actual pair produced by a failed predicate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: String,
    pub actual: String,
}

/// The rendered output a scenario runs against
#[derive(Debug, Clone, Default)]
pub struct Surface {
    nodes: Vec<Node>,
    focused: Option<NodeId>,
}

impl Surface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its handle
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of nodes on the surface
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the surface has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read a node by handle
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The node currently holding keyboard focus
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Find the single node matching a locator.
    ///
    /// Returns the number of matches on failure so the runner can report
    /// "matched 0" vs. "matched N" distinctly.
    pub fn locate(&self, locator: &Locator) -> Result<NodeId, usize> {
        let matches: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| Self::matches(node, locator))
            .map(|(index, _)| NodeId(index))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            other => Err(other.len()),
        }
    }

    fn matches(node: &Node, locator: &Locator) -> bool {
        match locator {
            Locator::Role(role) => node.role == *role,
            Locator::Label(text) => node.label.as_deref() == Some(text.as_str()),
            Locator::Placeholder(text) => node.placeholder.as_deref() == Some(text.as_str()),
        }
    }

    /// Apply a synthesized input event to a node.
    ///
    /// Disabled and hidden nodes absorb events without any state change; a
    /// key press only takes effect while its target holds focus.
    pub fn dispatch(&mut self, id: NodeId, event: &InputEvent) {
        if self.nodes[id.0].disabled || !self.nodes[id.0].visible {
            return;
        }

        match event {
            InputEvent::Click => {
                self.focused = Some(id);
                self.activate(id);
            }
            InputEvent::Focus => {
                self.focused = Some(id);
            }
            InputEvent::KeyPress(key) => {
                if self.focused == Some(id) && Self::is_activation_key(*key) {
                    self.activate(id);
                }
            }
            InputEvent::TypeText(text) => {
                self.focused = Some(id);
                if self.nodes[id.0].role == Role::TextInput {
                    for ch in text.chars() {
                        self.nodes[id.0].value.push(ch);
                    }
                }
            }
        }
    }

    fn is_activation_key(key: Key) -> bool {
        matches!(key, Key::Enter | Key::Space)
    }

    fn activate(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        match node.role {
            Role::Button => node.activations += 1,
            Role::Checkbox | Role::Switch => node.checked = !node.checked,
            Role::TextInput => {}
        }
    }

    /// Check a predicate against a node's observable state
    pub fn check(&self, id: NodeId, predicate: &Predicate) -> Result<(), Mismatch> {
        let node = &self.nodes[id.0];
        let focused = self.focused == Some(id);

        let (ok, expected, actual) = match predicate {
            Predicate::ValueEquals(expected) => (
                node.value == *expected,
                format!("value \"{expected}\""),
                format!("value \"{}\"", node.value),
            ),
            Predicate::IsChecked => (node.checked, checked_str(true), checked_str(node.checked)),
            Predicate::IsUnchecked => {
                (!node.checked, checked_str(false), checked_str(node.checked))
            }
            Predicate::IsDisabled => (
                node.disabled,
                enabled_str(false),
                enabled_str(!node.disabled),
            ),
            Predicate::IsEnabled => (
                !node.disabled,
                enabled_str(true),
                enabled_str(!node.disabled),
            ),
            Predicate::IsFocused => (
                focused,
                "focused".to_string(),
                if focused { "focused" } else { "not focused" }.to_string(),
            ),
            Predicate::IsVisible => (
                node.visible,
                "visible".to_string(),
                if node.visible { "visible" } else { "hidden" }.to_string(),
            ),
            Predicate::ActivationCount(expected) => (
                node.activations == *expected,
                format!("{expected} activation(s)"),
                format!("{} activation(s)", node.activations),
            ),
        };

        if ok {
            Ok(())
        } else {
            Err(Mismatch { expected, actual })
        }
    }
}

fn checked_str(checked: bool) -> String {
    if checked { "checked" } else { "unchecked" }.to_string()
}

fn enabled_str(enabled: bool) -> String {
    if enabled { "enabled" } else { "disabled" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_requires_exactly_one_match() {
        let mut surface = Surface::new();
        surface.push(Node::button("Save"));
        surface.push(Node::button("Cancel"));

        assert_eq!(surface.locate(&Locator::role(Role::Button)), Err(2));
        assert_eq!(surface.locate(&Locator::role(Role::Switch)), Err(0));
        assert!(surface.locate(&Locator::label("Save")).is_ok());
    }

    #[test]
    fn click_toggles_checkbox_state() {
        let mut surface = Surface::new();
        let id = surface.push(Node::checkbox("Toggle me"));

        assert!(!surface.node(id).is_checked());
        surface.dispatch(id, &InputEvent::Click);
        assert!(surface.node(id).is_checked());
        surface.dispatch(id, &InputEvent::Click);
        assert!(!surface.node(id).is_checked());
    }

    #[test]
    fn disabled_node_absorbs_events() {
        let mut surface = Surface::new();
        let id = surface.push(Node::switch("Locked").disabled(true));

        surface.dispatch(id, &InputEvent::Click);
        surface.dispatch(id, &InputEvent::Focus);

        assert!(!surface.node(id).is_checked());
        assert_eq!(surface.focused(), None);
    }

    #[test]
    fn typing_appends_characters_in_order() {
        let mut surface = Surface::new();
        let id = surface.push(Node::text_input().placeholder("Type here..."));

        surface.dispatch(id, &InputEvent::TypeText("Hello".into()));
        surface.dispatch(id, &InputEvent::TypeText(", world".into()));

        assert_eq!(surface.node(id).current_value(), "Hello, world");
    }

    #[test]
    fn enter_activates_only_the_focused_button() {
        let mut surface = Surface::new();
        let id = surface.push(Node::button("Press Enter"));

        // Not focused yet: the key press has no effect.
        surface.dispatch(id, &InputEvent::KeyPress(Key::Enter));
        assert_eq!(surface.node(id).activation_count(), 0);

        surface.dispatch(id, &InputEvent::Focus);
        surface.dispatch(id, &InputEvent::KeyPress(Key::Enter));
        assert_eq!(surface.node(id).activation_count(), 1);
    }

    #[test]
    fn click_and_enter_have_the_same_observable_effect() {
        let mut clicked = Surface::new();
        let a = clicked.push(Node::button("Go"));
        clicked.dispatch(a, &InputEvent::Click);

        let mut keyed = Surface::new();
        let b = keyed.push(Node::button("Go"));
        keyed.dispatch(b, &InputEvent::Focus);
        keyed.dispatch(b, &InputEvent::KeyPress(Key::Enter));

        assert_eq!(
            clicked.node(a).activation_count(),
            keyed.node(b).activation_count()
        );
    }

    #[test]
    fn check_reports_expected_vs_actual() {
        let mut surface = Surface::new();
        let id = surface.push(Node::text_input().value("abc"));

        let mismatch = surface
            .check(id, &Predicate::ValueEquals("xyz".into()))
            .expect_err("value differs");
        assert_eq!(mismatch.expected, "value \"xyz\"");
        assert_eq!(mismatch.actual, "value \"abc\"");
    }
}
