//! Table stories

use gpui::{div, prelude::*, px, AnyView, App, Context, Entity, IntoElement, Render, Window};

use crate::catalog::{Section, StoryEntry, StoryLayout};
use crate::components::composite::data_table::{data_table, Column, DataTable};
use crate::components::primitives::badge::{Badge, BadgeVariant};
use crate::error::Result;
use crate::fixtures::{invoices, Invoice, InvoiceStatus};
use crate::stories::{page_body, variant};

/// Catalog entry for the table page
pub fn entry() -> StoryEntry {
    StoryEntry {
        id: "primitives/table",
        title: "Table",
        section: Section::Primitives,
        description: "Columnar data display with status badges and an empty state.",
        layout: StoryLayout::Padded,
        render,
        scenarios: None,
    }
}

fn render(_window: &mut Window, cx: &mut App) -> Result<AnyView> {
    Ok(cx.new(InvoiceTableStory::new).into())
}

fn status_badge(status: InvoiceStatus) -> Badge {
    let variant = match status {
        InvoiceStatus::Paid => BadgeVariant::Default,
        InvoiceStatus::Pending => BadgeVariant::Secondary,
        InvoiceStatus::Unpaid => BadgeVariant::Destructive,
    };
    Badge::new(status.as_str()).variant(variant)
}

fn invoice_columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("id", "Invoice", |row: &Invoice| {
            div().child(row.id).into_any_element()
        })
        .fixed_width(100.0),
        Column::new("status", "Status", |row: &Invoice| {
            status_badge(row.status).into_any_element()
        })
        .fixed_width(120.0),
        Column::new("method", "Method", |row: &Invoice| {
            div().child(row.method).into_any_element()
        })
        .flex_width(Some(160.0)),
        Column::new("issued", "Issued", |row: &Invoice| {
            div()
                .child(row.issued.format("%b %e, %Y").to_string())
                .into_any_element()
        })
        .fixed_width(120.0),
        Column::new("amount", "Amount", |row: &Invoice| {
            div().child(row.amount).into_any_element()
        })
        .fixed_width(100.0),
    ]
}

struct InvoiceTableStory {
    table: Entity<DataTable<Invoice>>,
    empty_table: Entity<DataTable<Invoice>>,
}

impl InvoiceTableStory {
    fn new(cx: &mut Context<Self>) -> Self {
        let table = data_table(invoice_columns(), invoices(), cx);
        let empty_table = data_table(invoice_columns(), Vec::new(), cx);
        Self { table, empty_table }
    }
}

impl Render for InvoiceTableStory {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page_body()
            .child(variant(
                "Invoices",
                div().w(px(620.0)).child(self.table.clone()),
            ))
            .child(variant(
                "Empty",
                div().w(px(620.0)).child(self.empty_table.clone()),
            ))
    }
}
