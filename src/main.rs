use clap::{ArgAction, Parser};
use std::path::PathBuf;

use zencanvas::config::Config;
use zencanvas::draw::Brush;
use zencanvas::export::{ExportManager, FileSink};
use zencanvas::gallery::GalleryStore;
use zencanvas::input::{InputState, StencilSettings};
use zencanvas::session;
use zencanvas::shell::PlayerProfile;
use zencanvas::util::expand_tilde;

#[derive(Parser, Debug)]
#[command(name = "zencanvas")]
#[command(version, about = "Symmetric mandala drawing engine and mindfulness toolkit")]
struct Cli {
    /// Render a saved session file to a PNG
    #[arg(long, value_name = "SESSION_FILE")]
    render: Option<PathBuf>,

    /// Output path for --render (defaults to the configured export directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas size in CSS pixels for --render
    #[arg(long, default_value_t = 512.0, value_name = "PIXELS")]
    size: f64,

    /// Display scale factor for --render (2.0 doubles the output resolution)
    #[arg(long, default_value_t = 1.0, value_name = "FACTOR")]
    scale: f64,

    /// List gallery entries for a player id
    #[arg(long, value_name = "PLAYER")]
    gallery: Option<String>,

    /// Write a documented default config to ~/.config/zencanvas/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        Config::create_default_file()?;
        println!("Default config written. Edit it and re-run.");
        return Ok(());
    }

    let config = Config::load()?;

    if let Some(session_file) = cli.render {
        render_session(&config, &session_file, cli.output, cli.size, cli.scale)?;
    } else if let Some(player) = cli.gallery {
        list_gallery(&config, &player)?;
    } else {
        // No flags: show usage
        println!("zencanvas: symmetric mandala drawing engine");
        println!();
        println!("Usage:");
        println!("  zencanvas --render FILE [-o OUT]   Replay a saved session into a PNG");
        println!("  zencanvas --gallery PLAYER         List a player's gallery entries");
        println!("  zencanvas --init-config            Write a default config file");
        println!("  zencanvas --help                   Show help");
        println!();
        println!("Render options:");
        println!("  --size PIXELS    Canvas size in CSS pixels (default 512)");
        println!("  --scale FACTOR   Display scale; 2.0 doubles the output resolution");
        println!();
        println!("Sessions are produced by front-ends embedding this engine;");
        println!("see config.example.toml for drawing and export settings.");
    }

    Ok(())
}

fn render_session(
    config: &Config,
    session_file: &std::path::Path,
    output: Option<PathBuf>,
    size: f64,
    scale: f64,
) -> anyhow::Result<()> {
    let snapshot = session::load_snapshot(session_file)?
        .ok_or_else(|| anyhow::anyhow!("no session found at {}", session_file.display()))?;

    let brush = Brush {
        color: config.default_color(),
        width: config.drawing.brush_width,
        symmetry: config.drawing.symmetry,
    };
    let stencil = StencilSettings {
        visible: false,
        circles: config.stencil.circles,
    };
    let mut input = InputState::new(size, size, scale, brush, stencil)?;
    session::apply_snapshot(snapshot, &mut input)?;

    match output {
        Some(path) => {
            let png = input.surface().encode_png()?;
            std::fs::write(&path, png)?;
            println!("Rendered to {}", path.display());
        }
        None => {
            let profile_path = Config::get_config_path()?
                .with_file_name("profile.json");
            let profile = PlayerProfile::load_or_create(&profile_path)?;
            let mut sink = FileSink::from_config(
                &config.export.save_directory,
                &config.export.filename_template,
            );
            let mut manager = ExportManager::new();
            let location = manager.export(input.surface(), &profile.id, &mut sink)?;
            println!("Rendered to {location}");
        }
    }

    Ok(())
}

fn list_gallery(config: &Config, player: &str) -> anyhow::Result<()> {
    let store = GalleryStore::new(expand_tilde(&config.gallery.index_file));
    let entries = store.entries_for(player)?;

    if entries.is_empty() {
        println!("No gallery entries for {player}");
        return Ok(());
    }

    for entry in entries {
        println!("{}  {}  {}", entry.id, entry.name, entry.url);
    }
    Ok(())
}
