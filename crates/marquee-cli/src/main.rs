use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use marquee_core::config::SlideConfig;
use marquee_core::{AppConfig, Direction, Length};

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about = "An infinite looping slide strip for the terminal")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (default: ~/.config/marquee/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal marquee
    Run(RunArgs),
    /// Print the render plan: geometry, keyframes, track and overlays
    Plan {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        slider: SliderArgs,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
struct RunArgs {
    #[command(flatten)]
    slider: SliderArgs,

    /// Render the track without animating it
    #[arg(long = "static")]
    static_render: bool,
}

/// Slider props; flags override the configuration file
#[derive(Args, Debug, Default, Clone)]
struct SliderArgs {
    /// Width of every slide (e.g. 200px, 24ch, 12em)
    #[arg(short, long)]
    width: Option<Length>,

    /// Seconds for one full loop
    #[arg(short, long)]
    duration: Option<f64>,

    /// Scroll left to right
    #[arg(long)]
    to_right: bool,

    /// Pause while the mouse is over the track
    #[arg(long)]
    pause_on_hover: bool,

    /// Fade out the left and right edges
    #[arg(long)]
    blur_borders: bool,

    /// Color the edges fade into
    #[arg(long)]
    blur_border_color: Option<String>,

    /// Slide labels; replace the configured slides
    slides: Vec<String>,
}

impl SliderArgs {
    fn apply(self, config: &mut AppConfig) {
        let slider = &mut config.slider;
        if let Some(width) = self.width {
            slider.width = width;
        }
        if let Some(duration) = self.duration {
            slider.duration_secs = duration;
        }
        if self.to_right {
            slider.direction = Direction::Right;
        }
        slider.pause_on_hover |= self.pause_on_hover;
        slider.blur_borders |= self.blur_borders;
        if let Some(color) = self.blur_border_color {
            slider.blur_border_color = color;
        }
        if !self.slides.is_empty() {
            config.slides = self
                .slides
                .into_iter()
                .map(|text| SlideConfig { text, width: None })
                .collect();
        }
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        // The TUI owns the screen; keep log lines out of it
        let path = config.log_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)?;

    match cli.command {
        Some(Commands::Run(args)) => run(config, args),
        None => run(config, cli.run),
        Some(Commands::Plan { json, slider }) => {
            init_logging(&config, false)?;
            slider.apply(&mut config);
            commands::plan::run(&config, json)
        }
        Some(Commands::Config { action }) => {
            init_logging(&config, false)?;
            match action {
                ConfigAction::Path => commands::config::path(&config_path),
                ConfigAction::Show => commands::config::show(&config),
                ConfigAction::Init { force } => commands::config::init(&config_path, force),
            }
        }
    }
}

fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    init_logging(&config, true)?;
    args.slider.apply(&mut config);
    commands::run::run(config, args.static_render)
}
