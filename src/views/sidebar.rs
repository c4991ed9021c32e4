//! Sidebar Navigation Component
//!
//! Fixed-width navigation listing catalog entries grouped by section, with
//! a filter input.

use crate::assets::CustomIconName;
use crate::catalog::Section;
use crate::constants::SIDEBAR_WIDTH;
use crate::states::{GalleryAppState, GalleryGlobalStore, i18n_sidebar};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon,
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Sidebar navigation component
pub struct GallerySidebar {
    /// App state entity for story selection
    app_state: Entity<GalleryAppState>,
    /// Filter input state
    search_state: Entity<InputState>,
    /// Subscriptions
    _subscriptions: Vec<Subscription>,
}

impl GallerySidebar {
    /// Create a new sidebar
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        let store = cx.global::<GalleryGlobalStore>();
        let app_state = store.app_state();

        let search_state = cx.new(|cx| {
            let placeholder = i18n_sidebar(cx, "search_placeholder").to_string();
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        // Re-render on story selection changes
        subscriptions.push(cx.observe(&app_state, |_this, _model, cx| {
            cx.notify();
        }));

        // Re-render on filter changes
        subscriptions.push(cx.subscribe(&search_state, |_this, _state, event, cx| {
            if matches!(event, InputEvent::Change | InputEvent::PressEnter { .. }) {
                cx.notify();
            }
        }));

        Self {
            app_state,
            search_state,
            _subscriptions: subscriptions,
        }
    }

    fn section_icon(section: Section) -> Icon {
        match section {
            Section::Primitives => Icon::from(CustomIconName::Primitives),
            Section::Blocks => Icon::from(CustomIconName::Blocks),
            Section::Pages => Icon::from(CustomIconName::Pages),
        }
    }

    /// Render one story navigation button
    fn render_story_button(
        &self,
        id: &'static str,
        title: &'static str,
        is_active: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;
        let app_state = self.app_state.clone();

        let btn = Button::new(id)
            .ghost()
            .w_full()
            .child(
                div()
                    .w_full()
                    .child(Label::new(title).text_sm()),
            )
            .on_click(move |_, _, cx| {
                app_state.update(cx, |state, cx| {
                    state.select_story(Some(id.to_string()), cx);
                });
            });

        div()
            .id(id)
            .w_full()
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }

    /// Render one section heading plus its filtered entries
    fn render_section(&self, section: Section, cx: &mut Context<Self>) -> impl IntoElement {
        let query = self
            .search_state
            .read(cx)
            .value()
            .trim()
            .to_lowercase();

        let selected = self
            .app_state
            .read(cx)
            .selected_story()
            .map(|s| s.to_string());

        let store = cx.global::<GalleryGlobalStore>().clone();
        let entries: Vec<(&'static str, &'static str, bool)> = store
            .catalog()
            .section_entries(section)
            .filter(|entry| {
                query.is_empty() || entry.title.to_lowercase().contains(&query)
            })
            .map(|entry| {
                let is_active = selected.as_deref() == Some(entry.id);
                (entry.id, entry.title, is_active)
            })
            .collect();

        let heading = div()
            .px_3()
            .pt_4()
            .pb_1()
            .flex()
            .items_center()
            .gap_2()
            .child(Self::section_icon(section).size_4().text_color(cx.theme().muted_foreground))
            .child(
                Label::new(i18n_sidebar(cx, section.title_key()))
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            );

        let mut list = v_flex().w_full().child(heading);
        for (id, title, is_active) in entries {
            list = list.child(self.render_story_button(id, title, is_active, cx));
        }
        list
    }
}

impl Render for GallerySidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let secondary_bg = cx.theme().secondary;

        let sections = Section::all();
        let mut body = v_flex().w_full();
        for section in sections {
            body = body.child(self.render_section(section, cx));
        }

        v_flex()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(secondary_bg)
            .border_r_1()
            .border_color(border_color)
            // Filter input
            .child(
                div()
                    .w_full()
                    .p_2()
                    .border_b_1()
                    .border_color(border_color)
                    .child(Input::new(&self.search_state).w_full().cleanable(true)),
            )
            // Story list
            .child(
                div()
                    .id("sidebar-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(body),
            )
    }
}
