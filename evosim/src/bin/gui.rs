//! windowed viewer
//!
//! space starts and pauses, r resets, a and e cycle through what gets highlighted,
//! numpad plus and minus change how many ticks run per update.

use clap::Parser;
use evosim::config;
use evosim::renderer::Renderer;
use evosim::stats::ReportLog;
use evosim::Session;
use opengl_graphics::{GlGraphics, OpenGL};
use piston::event_loop::{EventSettings, Events};
use piston::input;
use piston::input::{ButtonEvent, MouseCursorEvent, RenderEvent, UpdateEvent};
use piston::window::WindowSettings;
use sdl2_window::Sdl2Window as Window;

#[derive(Parser)]
#[command(name = "evosim-gui")]
#[command(version)]
#[command(about = "Watch the creature simulation")]
struct Cli {
    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Updates per second
    #[arg(long, default_value = "60")]
    ups: u64,

    /// Log a report every this many ticks, 0 disables reports
    #[arg(long, default_value = "600")]
    report_every: u64,
}

/// system fonts are either found on disk or handed over already loaded
enum Font {
    File(std::path::PathBuf),
    Loaded(Vec<u8>),
}

/// asks the system for a monospace font, anything sans serif will do though
fn find_font() -> anyhow::Result<Font> {
    use font_kit::family_name::FamilyName;
    use font_kit::handle::Handle;
    use font_kit::properties::Properties;
    use font_kit::source::SystemSource;

    let families = [
        FamilyName::Title("DejaVu Sans Mono".to_owned()),
        FamilyName::Monospace,
        FamilyName::SansSerif,
    ];
    let handle = SystemSource::new()
        .select_best_match(&families, &Properties::new())
        .map_err(|e| anyhow::anyhow!("no usable font found: {:?}", e))?;
    Ok(match handle {
        Handle::Path { path, .. } => Font::File(path),
        Handle::Memory { bytes, .. } => Font::Loaded(bytes.to_vec()),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let opengl = OpenGL::V3_2;
    let mut window: Window = WindowSettings::new(
        "evosim",
        [config::WORLD_WIDTH as u32, config::WORLD_HEIGHT as u32],
    )
    .graphics_api(opengl)
    .exit_on_esc(true)
    .build()
    .map_err(|e| anyhow::anyhow!("could not open a window: {}", e))?;

    let mut session = Session::new(cli.seed);
    session.subscribe(ReportLog::new(cli.report_every));

    let mut render = Renderer::new(GlGraphics::new(opengl));

    let ts = opengl_graphics::TextureSettings::new();
    let font = find_font()?;
    let mut cache = match &font {
        Font::File(path) => {
            log::info!("using font {}", path.display());
            opengl_graphics::GlyphCache::new(path, (), ts)
                .map_err(|e| anyhow::anyhow!("loading font {}: {:?}", path.display(), e))?
        }
        Font::Loaded(bytes) => opengl_graphics::GlyphCache::from_bytes(bytes, (), ts)
            .map_err(|e| anyhow::anyhow!("loading in-memory font: {:?}", e))?,
    };

    let mut speed = 1;

    let mut events = Events::new(EventSettings::new().ups(cli.ups));
    while let Some(e) = events.next(&mut window) {
        if let Some(args) = e.button_args() {
            if args.state == input::ButtonState::Release {
                use input::keyboard::Key;
                match args.button {
                    input::Button::Keyboard(Key::Space) => session.toggle(),
                    input::Button::Keyboard(Key::R) => {
                        session.reset();
                        log::info!("reset, paused");
                    }
                    input::Button::Keyboard(Key::A) => {
                        render.selection = render.selection.rotate();
                        log::info!("now highlighting {:?}", render.selection);
                    }
                    input::Button::Keyboard(Key::E) => {
                        render.selection = render.selection.rotate_rev();
                        log::info!("now highlighting {:?}", render.selection);
                    }
                    input::Button::Keyboard(Key::NumPadPlus) => {
                        speed += 1;
                        log::info!("now running {} ticks per update", speed);
                    }
                    input::Button::Keyboard(Key::NumPadMinus) => {
                        if speed > 1 {
                            speed -= 1;
                        }
                        log::info!("now running {} ticks per update", speed);
                    }
                    input::Button::Keyboard(k) => {
                        log::debug!("unhandled keypress: {:?}", k);
                    }
                    _ => (),
                }
            }
        }
        if let Some(args) = e.mouse_cursor_args() {
            render.mousepos = args;
        }
        if let Some(args) = e.render_args() {
            render.render(&session, &args, &mut cache);
        }
        if e.update_args().is_some() {
            for _ in 0..speed {
                session.tick();
            }
        }
    }
    log::info!("goodbye!");
    Ok(())
}
