//! Story Canvas
//!
//! Renders the selected story inside its declared layout wrapper. A story
//! whose view factory fails is shown as a failed entry without affecting
//! the rest of the catalog.

use crate::assets::CustomIconName;
use crate::catalog::StoryLayout;
use crate::constants::CANVAS_TOOLBAR_HEIGHT;
use crate::states::{GalleryAppState, GalleryGlobalStore, i18n_canvas, i18n_common};
use gpui::{
    AnyView, Context, Entity, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, Icon, IconName, label::Label, v_flex};
use tracing::error;

/// Story canvas component
pub struct StoryCanvas {
    /// App state entity
    app_state: Entity<GalleryAppState>,
    /// Identifier of the story the cached view was built for
    built_for: Option<String>,
    /// Cached story view
    view: Option<AnyView>,
    /// Render failure message for the current story, if any
    render_error: Option<String>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl StoryCanvas {
    /// Create a new canvas
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<GalleryGlobalStore>();
        let app_state = store.app_state();

        let mut subscriptions = Vec::new();
        subscriptions.push(cx.observe(&app_state, |_this, _model, cx| {
            cx.notify();
        }));

        Self {
            app_state,
            built_for: None,
            view: None,
            render_error: None,
            _subscriptions: subscriptions,
        }
    }

    /// Build the story view if the selection changed since the last build
    fn ensure_view(&mut self, id: &str, window: &mut Window, cx: &mut Context<Self>) {
        if self.built_for.as_deref() == Some(id) {
            return;
        }

        self.built_for = Some(id.to_string());
        self.view = None;
        self.render_error = None;

        let store = cx.global::<GalleryGlobalStore>().clone();
        let Some(entry) = store.catalog().get(id) else {
            self.render_error = Some(format!("unknown story id: {id}"));
            return;
        };

        match (entry.render)(window, cx) {
            Ok(view) => self.view = Some(view),
            Err(e) => {
                error!(story = id, error = %e, "Story failed to render");
                self.render_error = Some(e.to_string());
            }
        }
    }

    /// Render the welcome screen shown before any story is selected
    fn render_welcome(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Icon::from(CustomIconName::Logo)
                            .size_8()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(Label::new(i18n_common(cx, "welcome_title")).text_lg())
                    .child(
                        Label::new(i18n_common(cx, "welcome_body"))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
    }

    /// Render the failure card for a story whose view could not be built
    fn render_failure(&self, message: &str, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        Icon::new(IconName::CircleX)
                            .size_5()
                            .text_color(cx.theme().danger),
                    )
                    .child(
                        Label::new(i18n_canvas(cx, "render_failed"))
                            .text_color(cx.theme().danger),
                    )
                    .child(
                        Label::new(message.to_string())
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Label::new(i18n_canvas(cx, "other_entries_unaffected"))
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
    }

    /// Wrap the story view in its declared layout
    fn render_story(&self, layout: StoryLayout, view: AnyView) -> impl IntoElement {
        match layout {
            StoryLayout::Centered => div()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .child(view)
                .into_any_element(),
            StoryLayout::Padded => div()
                .id("canvas-scroll")
                .size_full()
                .overflow_y_scroll()
                .child(view)
                .into_any_element(),
            StoryLayout::Fullscreen => div().size_full().child(view).into_any_element(),
        }
    }
}

impl Render for StoryCanvas {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selected = self
            .app_state
            .read(cx)
            .selected_story()
            .map(|s| s.to_string());

        let Some(id) = selected else {
            self.built_for = None;
            self.view = None;
            self.render_error = None;
            return self.render_welcome(cx).into_any_element();
        };

        self.ensure_view(&id, window, cx);

        let store = cx.global::<GalleryGlobalStore>().clone();
        let (title, description, layout) = store
            .catalog()
            .get(&id)
            .map(|entry| (entry.title, entry.description, entry.layout))
            .unwrap_or(("Unknown", "", StoryLayout::Centered));

        let toolbar = div()
            .w_full()
            .h(px(CANVAS_TOOLBAR_HEIGHT))
            .px_4()
            .flex()
            .items_center()
            .gap_3()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(Label::new(title).text_lg())
            .child(
                Label::new(description)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            );

        let body = if let Some(message) = self.render_error.clone() {
            self.render_failure(&message, cx).into_any_element()
        } else if let Some(view) = self.view.clone() {
            self.render_story(layout, view).into_any_element()
        } else {
            div().into_any_element()
        };

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .child(toolbar)
            .child(div().flex_1().overflow_hidden().child(body))
            .into_any_element()
    }
}
