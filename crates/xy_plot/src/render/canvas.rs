use super::{Figure, colors::Colors};

use ab_glyph::{FontVec, PxScale};
use font_kit::{family_name::FamilyName, properties::Properties, source::SystemSource};
use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::{
    drawing::{
        draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut,
        draw_line_segment_mut, draw_text_mut,
    },
    rect::Rect,
};

/// 画像描画用のコンテキスト構造体
pub struct Canvas<'a> {
    image: RgbImage,
    font: Option<&'a FontVec>,
}

impl<'a> Canvas<'a> {
    /// 白背景のキャンバスを作成
    pub fn new(width: u32, height: u32, font: Option<&'a FontVec>) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, Colors::WHITE),
            font,
        }
    }

    /// 矩形を描画（塗りつぶし）
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb<u8>) {
        if let Some(rect) = to_rect(x, y, width, height) {
            draw_filled_rect_mut(&mut self.image, rect, color);
        }
    }

    /// 矩形の境界線を描画
    pub fn draw_rect_outline(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb<u8>) {
        if let Some(rect) = to_rect(x, y, width, height) {
            draw_hollow_rect_mut(&mut self.image, rect, color);
        }
    }

    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
        draw_line_segment_mut(
            &mut self.image,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
        );
    }

    pub fn draw_disc(&mut self, center: (f64, f64), radius: u32, color: Rgb<u8>) {
        draw_filled_circle_mut(
            &mut self.image,
            (center.0.round() as i32, center.1.round() as i32),
            radius as i32,
            color,
        );
    }

    /// テキストを描画。フォントが無い場合は何もしない
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, font_size: f64, color: Rgb<u8>) {
        let Some(font) = self.font else {
            return;
        };
        let scale = PxScale::from(font_size as f32);
        draw_text_mut(
            &mut self.image,
            color,
            x as i32,
            y as i32,
            scale,
            font,
            text,
        );
    }

    pub fn into_figure(self, title: impl Into<String>) -> Figure {
        Figure {
            title: title.into(),
            image: self.image,
        }
    }
}

fn to_rect(x: f64, y: f64, width: f64, height: f64) -> Option<Rect> {
    let (w, h) = (width.round() as u32, height.round() as u32);
    (w > 0 && h > 0).then(|| Rect::at(x.round() as i32, y.round() as i32).of_size(w, h))
}

/// システムフォントを読み込み
pub fn load_system_font() -> Option<FontVec> {
    let source = SystemSource::new();

    let font_families = [
        FamilyName::Title("DejaVu Sans".to_string()),
        FamilyName::Title("Arial".to_string()),
        FamilyName::SansSerif,
        FamilyName::Title("Helvetica".to_string()),
    ];

    for family in font_families {
        if let Ok(handle) = source.select_best_match(&[family], &Properties::new())
            && let Ok(font_kit_font) = handle.load()
            && let Some(font_bytes) = font_kit_font.copy_font_data()
            && let Ok(font) = FontVec::try_from_vec(font_bytes.to_vec())
        {
            return Some(font);
        }
    }

    None
}
