//! Scenario step types
//!
//! Steps are plain data interpreted by the runner: a target locator plus
//! either a synthesized input event or an assertion predicate.

use std::fmt;

/// Accessibility role a surface node advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Checkbox,
    Switch,
    TextInput,
}

impl Role {
    /// Display label used in locator error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Button => "button",
            Role::Checkbox => "checkbox",
            Role::Switch => "switch",
            Role::TextInput => "textinput",
        }
    }
}

/// Query that must match exactly one node on the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Match by accessibility role
    Role(Role),
    /// Match by visible label text
    Label(String),
    /// Match by input placeholder text
    Placeholder(String),
}

impl Locator {
    /// Locate by role
    pub fn role(role: Role) -> Self {
        Locator::Role(role)
    }

    /// Locate by label text
    pub fn label(text: impl Into<String>) -> Self {
        Locator::Label(text.into())
    }

    /// Locate by placeholder text
    pub fn placeholder(text: impl Into<String>) -> Self {
        Locator::Placeholder(text.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Role(role) => write!(f, "role \"{}\"", role.as_str()),
            Locator::Label(text) => write!(f, "label \"{text}\""),
            Locator::Placeholder(text) => write!(f, "placeholder \"{text}\""),
        }
    }
}

/// Named key for synthesized key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Tab,
    Escape,
}

/// Synthesized user input dispatched to a located node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer click
    Click,
    /// Move keyboard focus to the node
    Focus,
    /// Press a named key while the node is focused
    KeyPress(Key),
    /// Enter text character by character, in order
    TypeText(String),
}

/// Observable condition checked against a located node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The node's text value equals the given string
    ValueEquals(String),
    /// The node is in the checked state
    IsChecked,
    /// The node is in the unchecked state
    IsUnchecked,
    /// The node is disabled
    IsDisabled,
    /// The node is enabled
    IsEnabled,
    /// The node holds keyboard focus
    IsFocused,
    /// The node is visible
    IsVisible,
    /// The node's activation handler ran exactly this many times
    ActivationCount(usize),
}

/// What a step does once its target is located
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Dispatch a synthesized input event
    Dispatch(InputEvent),
    /// Check a predicate over the node's state
    Assert(Predicate),
}

/// One unit of scenario execution: locate a target, then act on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub target: Locator,
    pub action: StepAction,
}

impl Step {
    /// Human-readable description for step reports
    pub fn describe(&self) -> String {
        match &self.action {
            StepAction::Dispatch(InputEvent::Click) => format!("click {}", self.target),
            StepAction::Dispatch(InputEvent::Focus) => format!("focus {}", self.target),
            StepAction::Dispatch(InputEvent::KeyPress(key)) => {
                format!("press {key:?} on {}", self.target)
            }
            StepAction::Dispatch(InputEvent::TypeText(text)) => {
                format!("type \"{text}\" into {}", self.target)
            }
            StepAction::Assert(predicate) => format!("assert {predicate:?} on {}", self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_display_is_readable() {
        assert_eq!(Locator::role(Role::Button).to_string(), "role \"button\"");
        assert_eq!(Locator::label("Email").to_string(), "label \"Email\"");
        assert_eq!(
            Locator::placeholder("Type here...").to_string(),
            "placeholder \"Type here...\""
        );
    }

    #[test]
    fn describe_names_the_action_and_target() {
        let step = Step {
            target: Locator::role(Role::Checkbox),
            action: StepAction::Dispatch(InputEvent::Click),
        };
        assert_eq!(step.describe(), "click role \"checkbox\"");
    }
}
