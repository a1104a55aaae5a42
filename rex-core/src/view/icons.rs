//! src/view/icons.rs
//! Nerd Font glyphs for table rows and the search line.

pub const FOLDER_ICON: &str = "\u{f115}";
pub const FILE_ICON: &str = "\u{f15b}";
pub const SEARCH_ICON: &str = "\u{f002}";
