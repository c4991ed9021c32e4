//! Data table block
//!
//! Composed table section: tab-based view switching, status badges, and a
//! row-count footer over the invoice fixtures.

use gpui::{div, prelude::*, px, AnyView, App, Context, Entity, IntoElement, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::composite::data_table::{data_table, Column, DataTable};
use crate::components::primitives::badge::{Badge, BadgeVariant};
use crate::components::primitives::button::Button;
use crate::components::primitives::tabs::Tabs;
use crate::error::Result;
use crate::fixtures::{invoices, Invoice, InvoiceStatus};
use crate::stories::{page_body, variant};
use crate::theme::colors::GalleryColors;

/// Catalog entry for the data table block
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "blocks/data-table",
        title: "Data Table",
        section: Section::Blocks,
        description: "Table section with view tabs, status badges, and row counts.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(DataTableStory::new).into())
}

const VIEWS: [&str; 3] = ["Outline", "Performance", "Personnel"];

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("id", "Invoice", |row: &Invoice| {
            div().child(row.id).into_any_element()
        })
        .fixed_width(100.0),
        Column::new("status", "Status", |row: &Invoice| {
            let variant = match row.status {
                InvoiceStatus::Paid => BadgeVariant::Default,
                InvoiceStatus::Pending => BadgeVariant::Secondary,
                InvoiceStatus::Unpaid => BadgeVariant::Destructive,
            };
            Badge::new(row.status.as_str()).variant(variant).into_any_element()
        })
        .fixed_width(120.0),
        Column::new("method", "Method", |row: &Invoice| {
            div().child(row.method).into_any_element()
        })
        .flex_width(Some(180.0)),
        Column::new("amount", "Amount", |row: &Invoice| {
            div().child(row.amount).into_any_element()
        })
        .fixed_width(100.0),
    ]
}

struct DataTableStory {
    active_view: usize,
    full: Entity<DataTable<Invoice>>,
    few: Entity<DataTable<Invoice>>,
    empty: Entity<DataTable<Invoice>>,
}

impl DataTableStory {
    fn new(cx: &mut Context<Self>) -> Self {
        let rows = invoices();
        let full = data_table(columns(), rows.clone(), cx);
        let few = data_table(columns(), rows.into_iter().take(2).collect(), cx);
        let empty = data_table(columns(), Vec::new(), cx);

        Self {
            active_view: 0,
            full,
            few,
            empty,
        }
    }

    fn section(
        &self,
        id: usize,
        table: &Entity<DataTable<Invoice>>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let entity = cx.entity();
        let row_count = table.read(cx).row_count();

        let mut tabs = Tabs::new(("view-tabs", id)).active(self.active_view).on_change(
            move |index, _window, cx| {
                entity.update(cx, |this, cx| {
                    this.active_view = index;
                    cx.notify();
                });
            },
        );
        for label in VIEWS {
            tabs = tabs.tab(label);
        }

        div()
            .flex()
            .flex_col()
            .gap_3()
            .w(px(640.0))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(tabs)
                    .child(Button::outline(
                        ("customize-columns", id),
                        "Customize Columns",
                    )),
            )
            .child(table.clone())
            .child(
                div()
                    .text_sm()
                    .text_color(GalleryColors::text_secondary())
                    .child(format!("{row_count} row(s) total.")),
            )
    }
}

impl Render for DataTableStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let full = self.full.clone();
        let few = self.few.clone();
        let empty = self.empty.clone();

        page_body()
            .child(variant("Default", self.section(0, &full, cx)))
            .child(variant("Few rows", self.section(1, &few, cx)))
            .child(variant("Empty", self.section(2, &empty, cx)))
    }
}
