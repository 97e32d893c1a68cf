/// WF3D Terminal Demo - Rotating Wireframe Cube
///
/// Renders the reference unit cube as a rotating wireframe in the terminal.
/// Controls:
///   - WASD / Arrow Keys: Rotate the cube
///   - E/R: Roll rotation
///   - Q/ESC: Quit

use std::io;
use wf3d_core::Mesh;
use wf3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let cube = Mesh::cube();

    let mut app = TerminalApp::new(cube)?;
    app.run()?;

    Ok(())
}
