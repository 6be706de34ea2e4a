//! Interactive chart sink: render the series to pixels and show them in a
//! native window. `show` blocks until the window is dismissed.

use crate::series::DailySeries;
use crate::viz;
use anyhow::{anyhow, Result};
use eframe::egui;

/// Open a native window displaying the chart for `series`. Returns once the
/// user closes the window. Fails on environments without a display server.
pub fn show(series: &DailySeries, width: u32, height: u32) -> Result<()> {
    let rgb = viz::render_rgb(series, width, height)?;
    let image = egui::ColorImage::from_rgb([width as usize, height as usize], &rgb);
    let title = format!("Daily new COVID-19 cases — {}", series.country);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartViewer::new(image)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}

struct ChartViewer {
    image: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl ChartViewer {
    fn new(image: egui::ColorImage) -> Self {
        Self {
            image,
            texture: None,
        }
    }
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("chart", self.image.clone(), egui::TextureOptions::LINEAR)
        });
        let sized = egui::load::SizedTexture::new(texture.id(), texture.size_vec2());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.image(sized);
            });
        });
    }
}
