use eframe::App;
use egui::{vec2, CentralPanel, Color32, Context, Label, RichText, ScrollArea};

use crate::db_manager::Dataset;
use crate::quake_graphs::draw_pie_chart;
use crate::records::{EarthquakeRecord, LocationAggregate, TABLE_COLUMNS};

const BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
const ROW_HEIGHT: f32 = 24.0;

/// Exactly two views over the startup dataset; nothing is reloaded when the
/// user switches between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    TableView,
    ChartView,
}

pub struct QuakeViewApp {
    pub screen: Screen,
    pub records: Vec<EarthquakeRecord>,
    pub aggregates: Vec<LocationAggregate>,
}

impl QuakeViewApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            screen: Screen::TableView,
            records: dataset.records,
            aggregates: dataset.aggregates,
        }
    }
}

impl App for QuakeViewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::TableView => self.show_table_screen(ctx),
            Screen::ChartView => self.show_chart_screen(ctx),
        }
    }
}

impl QuakeViewApp {
    fn show_table_screen(&mut self, ctx: &Context) {
        let frame = egui::Frame::default().fill(BACKGROUND);

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            if ui.button("Switch to Pie Chart").clicked() {
                self.screen = Screen::ChartView;
            }
            ui.add_space(10.0);

            // equal share of the width per column
            let col_width = ui.available_width() / TABLE_COLUMNS.len() as f32;

            ui.horizontal(|ui| {
                for column in TABLE_COLUMNS {
                    ui.add_sized(
                        vec2(col_width, ROW_HEIGHT),
                        Label::new(RichText::new(column.title).strong().color(Color32::BLACK)),
                    );
                }
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show_viewport(ui, |ui, viewport| {
                    if self.records.is_empty() {
                        return;
                    }

                    let total_height = self.records.len() as f32 * ROW_HEIGHT;
                    ui.set_min_height(total_height);

                    let start_row = (viewport.min.y / ROW_HEIGHT).floor().max(0.0) as usize;
                    let visible_rows = (viewport.height() / ROW_HEIGHT).ceil() as usize + 1;
                    let end_row = (start_row + visible_rows).min(self.records.len());

                    ui.add_space(start_row as f32 * ROW_HEIGHT);

                    for record in &self.records[start_row..end_row] {
                        ui.horizontal(|ui| {
                            for column in TABLE_COLUMNS {
                                ui.add_sized(
                                    vec2(col_width, ROW_HEIGHT),
                                    Label::new(
                                        RichText::new((column.value)(record))
                                            .color(Color32::BLACK),
                                    ),
                                );
                            }
                        });
                    }

                    let bottom_space = total_height - (end_row as f32 * ROW_HEIGHT);
                    if bottom_space > 0.0 {
                        ui.add_space(bottom_space);
                    }
                });
        });
    }

    fn show_chart_screen(&mut self, ctx: &Context) {
        let frame = egui::Frame::default().fill(BACKGROUND);

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            if ui.button("Back to Table View").clicked() {
                self.screen = Screen::TableView;
            }
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new("Number of Earthquakes by Location").color(Color32::BLACK),
                );
            });
            ui.add_space(10.0);
            draw_pie_chart(ui, &self.aggregates);
        });
    }
}
