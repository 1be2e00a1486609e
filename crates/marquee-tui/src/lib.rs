pub mod animation;
pub mod app;
pub mod event;
pub mod input;
pub mod metrics;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use metrics::CellMetrics;
pub use theme::Theme;
pub use themes::load_theme;
