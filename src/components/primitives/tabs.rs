//! Tabs Component

use std::rc::Rc;

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;

/// A horizontal tab bar.
///
/// Holds only the trigger row; the active pane is selected by the caller
/// from the reported index.
#[derive(IntoElement)]
pub struct Tabs {
    id: ElementId,
    labels: Vec<SharedString>,
    active: usize,
    on_change: Option<Rc<dyn Fn(usize, &mut Window, &mut App)>>,
}

impl Tabs {
    /// Create a new tab bar
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            labels: Vec::new(),
            active: 0,
            on_change: None,
        }
    }

    /// Append a tab label
    pub fn tab(mut self, label: impl Into<SharedString>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Set the active tab index
    pub fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// Set the change handler, called with the clicked tab index
    pub fn on_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Tabs {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let active = self.active;
        let on_change = self.on_change;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .p(px(3.0))
            .rounded_md()
            .bg(GalleryColors::secondary())
            .children(self.labels.into_iter().enumerate().map(|(index, label)| {
                let is_active = index == active;
                let on_change = on_change.clone();

                let (bg, fg) = if is_active {
                    (GalleryColors::surface(), GalleryColors::text_primary())
                } else {
                    (GalleryColors::transparent(), GalleryColors::text_secondary())
                };

                let mut tab = div()
                    .id(("tab", index))
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(bg)
                    .text_sm()
                    .text_color(fg)
                    .cursor_pointer()
                    .child(label);

                if !is_active {
                    tab = tab.hover(|s| s.text_color(GalleryColors::text_primary()));
                }

                if let Some(handler) = on_change {
                    tab = tab.on_click(move |_event, window, cx| {
                        handler(index, window, cx);
                    });
                }

                tab
            }))
    }
}
