pub mod icon_gen;
pub mod icon_render;
pub mod manifest_json;
pub mod typeface;
