use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub css_max_width: u32,
    pub css_max_height: u32,
    pub corner_size: u32,
    pub rotating_point_offset: u32,
    pub rotate_step_degrees: i32,
    pub default_brush_color: String,
    pub file_types: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            css_max_width: 700,
            css_max_height: 500,
            corner_size: 20,
            rotating_point_offset: 70,
            rotate_step_degrees: 30,
            default_brush_color: "#000000".to_string(),
            file_types: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }
}

impl EditorConfig {
    pub fn handles_extension(&self, ext: &str) -> bool {
        self.file_types.iter().any(|t| t.eq_ignore_ascii_case(ext))
    }
}
