mod glyphs;
mod window;

use daub_core::{palette, Layout, Session};
use daub_player::Player;
use daub_synth::Command;
use window::AppWindow;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let (send_commands, recv_commands) = std::sync::mpsc::channel();
    let player = Player::new()?;
    // keep the stream alive for the lifetime of the window
    let _stream = player.play(recv_commands)?;
    send_commands.send(Command::StartAmbience)?;
    let session = Session::new(Layout::new(
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        palette::NUM_ENTRIES,
    ));
    AppWindow {
        title: "daub".to_string(),
        width_px: CANVAS_WIDTH,
        height_px: CANVAS_HEIGHT,
    }
    .run(session, send_commands)
}
