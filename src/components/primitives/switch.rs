//! Switch Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::GalleryColors;

/// Switch size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwitchSize {
    /// Small switch
    Small,
    /// Medium switch (default)
    #[default]
    Medium,
}

/// A toggle switch component
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    size: SwitchSize,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Switch {
    /// Create a new switch
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            size: SwitchSize::Medium,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the size
    pub fn size(mut self, size: SwitchSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let disabled = self.disabled;
        let on_change = self.on_change;

        let (track_w, track_h, thumb) = match self.size {
            SwitchSize::Small => (px(28.0), px(16.0), px(12.0)),
            SwitchSize::Medium => (px(40.0), px(22.0), px(18.0)),
        };

        let track_bg = if checked {
            GalleryColors::control_checked()
        } else {
            GalleryColors::track_unchecked()
        };

        // Thumb slides by switching the track's justification side.
        let mut track = div()
            .w(track_w)
            .h(track_h)
            .rounded_full()
            .bg(track_bg)
            .p(px(2.0))
            .flex()
            .items_center();

        if checked {
            track = track.justify_end();
        } else {
            track = track.justify_start();
        }

        track = track.child(
            div()
                .size(thumb)
                .rounded_full()
                .bg(GalleryColors::thumb()),
        );

        let mut switch = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(track);

        if let Some(label) = self.label {
            switch = switch.child(
                div()
                    .text_sm()
                    .text_color(GalleryColors::text_primary())
                    .child(label),
            );
        }

        if !disabled {
            if let Some(handler) = on_change {
                switch = switch.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        } else {
            switch = switch.opacity(0.5);
        }

        switch
    }
}
