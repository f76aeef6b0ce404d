mod render;

pub use render::{
    BORDER_ADJUSTMENT, ResolvedTheme, adjust_color, render_theme_css,
};
