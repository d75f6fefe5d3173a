use crate::config;
use crate::select::Selection;
use crate::session::Session;
use crate::stats::Report;
use graphics::types::Matrix2d;
use opengl_graphics::GlGraphics;
use piston::input::RenderArgs;

pub struct Renderer {
    pub gl: GlGraphics,
    /// in window coordinates
    pub mousepos: [f64; 2],
    pub selection: Selection,
}

impl Renderer {
    pub fn new(gl: GlGraphics) -> Self {
        Self {
            gl,
            mousepos: [0.; 2],
            selection: Selection::default(),
        }
    }

    pub fn render<C>(&mut self, session: &Session, args: &RenderArgs, glyph_cache: &mut C)
    where
        C: graphics::character::CharacterCache<Texture = opengl_graphics::Texture>,
        <C as graphics::character::CharacterCache>::Error: std::fmt::Debug,
    {
        use graphics::*;

        const BACKGROUND: [f32; 4] = [0.05, 0.1, 0.08, 1.0];
        const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
        const VISION: [f32; 4] = [1.0, 1.0, 1.0, 0.1];
        const FOOD: [f32; 4] = [0.2, 0.75, 0.3, 1.0];
        const HEALTHY: [f32; 4] = [0.06, 0.73, 0.5, 1.0];
        const HUNGRY: [f32; 4] = [0.96, 0.62, 0.04, 1.0];
        const STARVING: [f32; 4] = [0.94, 0.27, 0.27, 1.0];

        let world = session.world();
        let (width, height) = (args.window_size[0], args.window_size[1]);
        let (sx, sy) = (width / config::WORLD_WIDTH, height / config::WORLD_HEIGHT);

        let sim_mouse = [self.mousepos[0] / sx, self.mousepos[1] / sy];
        let marker = self
            .selection
            .select(world.creatures().iter_indexed(), sim_mouse);

        let c = self.gl.draw_begin(args.viewport());
        let gl = &mut self.gl;
        clear(BACKGROUND, gl);
        let view = c.transform.scale(sx, sy);

        for f in world.food().iter() {
            ellipse(FOOD, ellipse::circle(f.pos[0], f.pos[1], f.size), view, gl);
        }

        for (key, creature) in world.creatures().iter_indexed() {
            let [x, y] = creature.status.pos;
            let genes = creature.genes();
            let energy = creature.energy_fraction();

            Ellipse::new_border(VISION, 0.5).draw(
                ellipse::circle(x, y, genes.vision_range),
                &c.draw_state,
                view,
                gl,
            );

            let [r, g, b] = creature.color();
            // fade out when starving
            let opacity = energy.clamp(0.3, 1.) as f32;
            let fill = [r as f32 / 255., g as f32 / 255., b as f32 / 255., opacity];
            let border = if energy > 0.5 {
                HEALTHY
            } else if energy > 0.2 {
                HUNGRY
            } else {
                STARVING
            };
            let radius = genes.size * (0.8 + energy.clamp(0., 1.) * 0.2);
            Ellipse::new(fill)
                .border(ellipse::Border {
                    color: border,
                    radius: 1.,
                })
                .draw(ellipse::circle(x, y, radius), &c.draw_state, view, gl);

            if Some(key) == marker {
                Ellipse::new_border(WHITE, 1.5).draw(
                    ellipse::circle(x, y, radius + 4.),
                    &c.draw_state,
                    view,
                    gl,
                );
                let display = format!(
                    "id: {}\ngeneration: {}\nenergy: {:.1} / {:.1}\nage: {:.0} / {:.0}\nspeed: {:.2}\nsize: {:.1}\nvision: {:.1}\nefficiency: {:.2}",
                    creature.id(),
                    creature.generation(),
                    creature.status.energy,
                    genes.max_energy,
                    creature.status.age,
                    genes.max_age,
                    genes.speed,
                    genes.size,
                    genes.vision_range,
                    genes.efficiency,
                );
                let at = c.transform.trans(x * sx + radius * sx + 6., y * sy);
                if let Err(e) = text_block(&display, 12, WHITE, at, glyph_cache, gl) {
                    log::warn!("could not draw creature info: {:?}", e);
                }
            }
        }

        let state = if session.is_running() {
            "running (space to pause, r to reset)"
        } else {
            "paused (space to start, r to reset)"
        };
        let overlay = format!(
            "{}\nhighlighting {:?}\n{}",
            state,
            self.selection,
            Report::gather(world)
        );
        if let Err(e) = text_block(&overlay, 14, WHITE, c.transform.trans(8., 4.), glyph_cache, gl)
        {
            log::warn!("could not draw statistics: {:?}", e);
        }
        self.gl.draw_end();
    }
}

/// draws text line by line, `at` being the upper left corner
fn text_block<C, G>(
    text: &str,
    size: u32,
    colour: [f32; 4],
    at: Matrix2d,
    glyphs: &mut C,
    g: &mut G,
) -> Result<(), C::Error>
where
    G: graphics::Graphics,
    C: graphics::character::CharacterCache<Texture = G::Texture>,
{
    use graphics::Transformed;
    let line_height = size as f64 * 1.25;
    for (i, line) in text.lines().enumerate() {
        let baseline = at.trans(0., line_height * (i + 1) as f64);
        graphics::text(colour, size, line, glyphs, baseline, g)?;
    }
    Ok(())
}
