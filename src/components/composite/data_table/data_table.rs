//! DataTable Component
//!
//! A data table rendering column definitions over a row slice, with striped
//! rows and an empty state.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::GalleryColors;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    empty_message: SharedString,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 36.0,
            header_height: 40.0,
            empty_message: "No results.".into(),
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get column width style
    fn column_width_style(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min } => min.unwrap_or(100.0),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(GalleryColors::table_header_bg())
            .border_b_1()
            .border_color(GalleryColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width_style(&col.width);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(GalleryColors::text_secondary())
                    .child(col.label.clone())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            GalleryColors::surface()
        } else {
            GalleryColors::muted()
        };

        div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(GalleryColors::table_row_hover()))
            .border_b_1()
            .border_color(GalleryColors::border())
            .children(self.columns.iter().map(|col| {
                let width = self.column_width_style(&col.width);
                let cell_content = col.render_cell(row);
                div()
                    .w(px(width))
                    .px_3()
                    .text_sm()
                    .text_color(GalleryColors::text_primary())
                    .overflow_hidden()
                    .child(cell_content)
            }))
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .h(px(96.0))
            .w_full()
            .flex()
            .items_center()
            .justify_center()
            .text_color(GalleryColors::text_muted())
            .child(self.empty_message.clone())
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .w_full()
            .flex()
            .flex_col()
            .bg(GalleryColors::surface())
            .border_1()
            .border_color(GalleryColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            table = table.child(
                div().w_full().children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                ),
            );
        }

        table
    }
}

/// Helper to create a DataTable entity
pub fn data_table<R: Clone + Send + Sync + 'static, V: 'static>(
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    cx: &mut Context<V>,
) -> Entity<DataTable<R>> {
    cx.new(|cx| {
        let mut table = DataTable::new(cx);
        table.set_columns(columns);
        table.set_rows(rows);
        table
    })
}
