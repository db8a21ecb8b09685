//! 描画結果を表示するウィンドウ
//!
//! いずれかのキーが押されるかウィンドウが閉じられるまでブロックする。

use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions, Vec2};
use image::RgbImage;

use crate::error::{CostViewError, Result};

/// 初期ウィンドウの最大辺
const MAX_INITIAL_SIDE: f32 = 900.0;
/// 初期ウィンドウの最小辺
const MIN_INITIAL_SIDE: f32 = 300.0;

pub struct CostViewerApp {
    texture: TextureHandle,
}

impl CostViewerApp {
    fn new(ctx: &egui::Context, image: ColorImage) -> Self {
        // 1画素単位のハイライトを潰さないよう最近傍補間
        let texture = ctx.load_texture("costs", image, TextureOptions::NEAREST);
        Self { texture }
    }
}

impl eframe::App for CostViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| any_key_pressed(&i.events)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let size = fit_size(self.texture.size_vec2(), ui.available_size());
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(&self.texture).fit_to_exact_size(size));
                });
            });
    }
}

/// キー押下イベントがあるか（リピートも含む）
pub fn any_key_pressed(events: &[egui::Event]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
}

/// アスペクト比を保って available に収まるサイズ
pub fn fit_size(image: Vec2, available: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (available.x / image.x).min(available.y / image.y).max(0.0);
    image * scale
}

fn initial_window_size(image: Vec2) -> Vec2 {
    let longest = image.x.max(image.y).max(1.0);
    let target = longest.clamp(MIN_INITIAL_SIDE, MAX_INITIAL_SIDE);
    image * (target / longest)
}

pub fn to_color_image(image: &RgbImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgb(size, image.as_raw())
}

/// 画像をウィンドウに表示し、キー入力まで待つ
pub fn show(image: &RgbImage, title: &str) -> Result<()> {
    let color_image = to_color_image(image);
    let inner_size = initial_window_size(egui::vec2(image.width() as f32, image.height() as f32));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(inner_size)
            .with_resizable(true),
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Box::new(CostViewerApp::new(&cc.egui_ctx, color_image))),
    )
    .map_err(|e| CostViewError::Display(e.to_string()))
}
