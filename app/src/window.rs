use crate::glyphs;
use anyhow::anyhow;
use daub_core::{layout, CueSink, PaintTarget, Session, SoundCue};
use daub_synth::Command;
use rgb_int::Rgb24;
use sdl2::{
    event::Event,
    keyboard::Keycode,
    mouse::MouseButton,
    pixels::Color,
    rect::Rect,
    render::{Canvas, Texture},
    video::Window as SdlWindow,
};
use std::{
    sync::mpsc::Sender,
    thread,
    time::{Duration, Instant},
};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);
const BUTTON_CORNER_RADIUS: i32 = 5;
const BUTTON_FILL: Color = Color::RGB(220, 220, 220);

fn color(rgb24: Rgb24) -> Color {
    Color::RGB(rgb24.r, rgb24.g, rgb24.b)
}

fn rect(r: layout::Rect) -> Rect {
    Rect::new(r.x, r.y, r.w as u32, r.h as u32)
}

/// Filled circle, no outline, drawn as horizontal spans.
fn fill_circle(
    canvas: &mut Canvas<SdlWindow>,
    cx: i32,
    cy: i32,
    radius: i32,
) -> Result<(), String> {
    for dy in -radius..=radius {
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.fill_rect(Rect::new(
            cx - half,
            cy + dy,
            (half * 2 + 1) as u32,
            1,
        ))?;
    }
    Ok(())
}

fn fill_rounded_rect(
    canvas: &mut Canvas<SdlWindow>,
    r: layout::Rect,
    radius: i32,
) -> Result<(), String> {
    canvas.fill_rect(Rect::new(
        r.x,
        r.y + radius,
        r.w as u32,
        (r.h - radius * 2) as u32,
    ))?;
    canvas.fill_rect(Rect::new(
        r.x + radius,
        r.y,
        (r.w - radius * 2) as u32,
        r.h as u32,
    ))?;
    for (cx, cy) in [
        (r.x + radius, r.y + radius),
        (r.x + r.w - radius, r.y + radius),
        (r.x + radius, r.y + r.h - radius),
        (r.x + r.w - radius, r.y + r.h - radius),
    ] {
        fill_circle(canvas, cx, cy, radius)?;
    }
    Ok(())
}

/// The persistent paint surface: a render-target texture that dabs are
/// drawn into as they happen, so strokes survive between frames without
/// re-drawing them.
struct PaintLayer<'a, 'b> {
    canvas: &'a mut Canvas<SdlWindow>,
    texture: &'a mut Texture<'b>,
}

impl PaintTarget for PaintLayer<'_, '_> {
    fn dab(&mut self, x: i32, y: i32, radius: i32, rgb24: Rgb24) {
        let result = self.canvas.with_texture_canvas(self.texture, |c| {
            c.set_draw_color(color(rgb24));
            if let Err(e) = fill_circle(c, x, y, radius) {
                log::error!("paint layer draw failed: {}", e);
            }
        });
        if let Err(e) = result {
            log::error!("paint layer render target unavailable: {}", e);
        }
    }

    fn clear(&mut self) {
        let result = self.canvas.with_texture_canvas(self.texture, |c| {
            c.set_draw_color(Color::RGB(255, 255, 255));
            c.clear();
        });
        if let Err(e) = result {
            log::error!("paint layer render target unavailable: {}", e);
        }
    }
}

/// Forwards cues to the synth command channel. A dead audio thread only
/// costs the sound, never the painting.
struct CueSender {
    commands: Sender<Command>,
}

impl CueSink for CueSender {
    fn cue(&mut self, cue: SoundCue) {
        if self.commands.send(Command::Cue(cue)).is_err() {
            log::warn!("audio engine gone; dropping cue");
        }
    }
}

pub struct AppWindow {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
}

impl AppWindow {
    pub fn run(
        &self,
        mut session: Session,
        commands: Sender<Command>,
    ) -> anyhow::Result<()> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(self.title.as_str(), self.width_px, self.height_px)
            .position_centered()
            .build()?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        let texture_creator = canvas.texture_creator();
        let mut paint_texture = texture_creator.create_texture_target(
            None,
            self.width_px,
            self.height_px,
        )?;
        let mut cue_sender = CueSender {
            commands: commands.clone(),
        };
        PaintLayer {
            canvas: &mut canvas,
            texture: &mut paint_texture,
        }
        .clear();
        let start = Instant::now();
        let mut event_pump =
            sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        'running: loop {
            let frame_start = Instant::now();
            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    Event::MouseButtonDown {
                        mouse_btn: MouseButton::Left,
                        x,
                        y,
                        ..
                    } => {
                        let mut layer = PaintLayer {
                            canvas: &mut canvas,
                            texture: &mut paint_texture,
                        };
                        session.pointer_down(x, y, &mut layer, &mut cue_sender);
                    }
                    Event::MouseMotion {
                        mousestate, x, y, ..
                    } if mousestate.left() => {
                        let mut layer = PaintLayer {
                            canvas: &mut canvas,
                            texture: &mut paint_texture,
                        };
                        session.pointer_drag(
                            x,
                            y,
                            start.elapsed(),
                            &mut layer,
                            &mut cue_sender,
                        );
                    }
                    Event::KeyDown {
                        keycode: Some(Keycode::C),
                        ..
                    } => {
                        let mut layer = PaintLayer {
                            canvas: &mut canvas,
                            texture: &mut paint_texture,
                        };
                        session.key_down('c', &mut layer, &mut cue_sender);
                    }
                    _ => (),
                }
            }
            self.push_ambience_params(&session, &commands);
            canvas
                .copy(&paint_texture, None, None)
                .map_err(|e| anyhow!(e))?;
            self.draw_palette(&mut canvas, &session)?;
            self.draw_clear_button(&mut canvas, &session)?;
            canvas.present();
            let since_frame_start = frame_start.elapsed();
            if let Some(until_next_frame) =
                FRAME_DURATION.checked_sub(since_frame_start)
            {
                thread::sleep(until_next_frame);
            }
        }
        Ok(())
    }

    /// Recomputed and re-sent every frame regardless of whether anything
    /// changed, so the effects track the canvas with one-frame lag at most.
    fn push_ambience_params(
        &self,
        session: &Session,
        commands: &Sender<Command>,
    ) {
        let params = session.ambience_params();
        for command in [
            Command::SetFilterCutoffHz(params.filter_cutoff_hz),
            Command::SetDelayFeedback(params.delay_feedback),
            Command::SetReverbWet(params.reverb_wet),
        ] {
            if commands.send(command).is_err() {
                log::warn!("audio engine gone; ambience params not applied");
                break;
            }
        }
    }

    fn draw_palette(
        &self,
        canvas: &mut Canvas<SdlWindow>,
        session: &Session,
    ) -> anyhow::Result<()> {
        for (i, entry) in session.palette().entries().enumerate() {
            canvas.set_draw_color(color(entry.color));
            canvas
                .fill_rect(rect(session.layout().palette_square(i)))
                .map_err(|e| anyhow!(e))?;
        }
        Ok(())
    }

    fn draw_clear_button(
        &self,
        canvas: &mut Canvas<SdlWindow>,
        session: &Session,
    ) -> anyhow::Result<()> {
        let button = session.layout().clear_button();
        canvas.set_draw_color(BUTTON_FILL);
        fill_rounded_rect(canvas, button, BUTTON_CORNER_RADIUS)
            .map_err(|e| anyhow!(e))?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.draw_rect(rect(button)).map_err(|e| anyhow!(e))?;
        glyphs::draw_text_centered(
            canvas,
            "Clear",
            button.x + button.w / 2,
            button.y + button.h / 2,
            Color::RGB(0, 0, 0),
        )
    }
}
