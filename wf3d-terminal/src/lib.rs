/// Terminal frontend for the wireframe renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wf3d_core::{Camera, Color, Framebuffer, Mesh, Projection, RotationState, Transform};

pub mod present;

pub use present::TermPresenter;

/// Pixel dimensions for a terminal of `cols` x `rows` cells.
///
/// Half-block cells: every character row shows two pixel rows. A degenerate
/// terminal size (e.g. no tty reports 0x0) is clamped to one cell so the
/// projection's aspect ratio stays valid.
fn frame_dimensions(cols: u16, rows: u16) -> (u32, u32) {
    (cols.max(1) as u32, rows.max(1) as u32 * 2)
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    mesh: Mesh,
    rotation: RotationState,
    camera: Camera,
    projection: Projection,
    framebuffer: Framebuffer,
    presenter: TermPresenter,
    wire_color: Color,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let (width, height) = frame_dimensions(cols, rows);

        Ok(Self {
            mesh,
            rotation: RotationState::new(0.3, 0.3, 0.0),
            camera: Camera::default(),
            projection: Projection::new(
                std::f32::consts::PI / 3.0,
                width as f32 / height as f32,
                0.1,
                100.0,
            ),
            framebuffer: Framebuffer::new(width, height),
            presenter: TermPresenter::new(),
            wire_color: Color::WHITE,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.rotation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.rotation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.rotation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.rotation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.rotation.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.rotation.rotate(0.0, 0.0, -0.1);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        self.rotation.rotate(0.01, 0.015, 0.0);
    }

    fn render(&mut self) -> io::Result<()> {
        let model = Transform::rotation_matrix(&self.rotation);
        let view = self.camera.view_matrix();
        let projection = self.projection.matrix();

        self.framebuffer.clear(Color::BLACK);
        self.framebuffer
            .draw_mesh(&self.mesh, &model, &view, &projection, self.wire_color);

        // Blit to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.presenter.present(&self.framebuffer, &mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            Print(format!(
                "WF3D Wireframe Renderer | FPS: {:.1} | Controls: WASD/Arrows=Rotate E/R=Roll Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
