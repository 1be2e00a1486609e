mod edge_fade;
mod marquee;
mod slide;
mod status_bar;

pub use edge_fade::EdgeFadeWidget;
pub use marquee::MarqueeWidget;
pub use slide::SlideWidget;
pub use status_bar::StatusBarWidget;
