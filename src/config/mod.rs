mod model;
mod persistence;
mod theme;

pub use model::{
    AnimationConfig, CharacterCasing, FontConfig, IndicatorConfig, LabelStyle, LayoutConfig,
    StripConfig, ThemeChoice,
};
pub use persistence::{
    config_base_dir, config_path, load_config, read_config, save_config, write_config,
};
pub use theme::{Override, ResolvedColors, StripColors, ThemePalette, ThemeProvider, resolve};
