use egui::{
    FontData, FontFamily,
    epaint::text::{FontInsert, FontPriority, InsertFontFamily},
};

/// Where the CJK fallback font is looked up on native, relative to the working directory.
pub const CJK_FONT_PATH: &str = "assets/fonts/SourceHanSerifCN-VF.ttf";

/// File name the web build fetches next to `index.html`.
pub const CJK_FONT_URL: &str = "./SourceHanSerifCN-VF.ttf";

/// Register a CJK font as the lowest priority fallback so Chinese labels render.
pub fn add_font(ctx: &egui::Context, font_data: Vec<u8>) {
    let data = FontData::from_owned(font_data);
    ctx.add_font(FontInsert::new(
        "source han serif",
        data,
        vec![
            InsertFontFamily {
                family: FontFamily::Proportional,
                priority: FontPriority::Lowest,
            },
            InsertFontFamily {
                family: FontFamily::Monospace,
                priority: FontPriority::Lowest,
            },
        ],
    ));
}
