use druid::{AppLauncher, LocalizedString, PlatformError, WindowDesc};
use tracing_subscriber::EnvFilter;

mod frame;
mod graphics;
mod math;
mod model;
mod projection;
mod state;
mod widget;

use state::Rotation;
use widget::CubeWidget;

const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

fn main() -> Result<(), PlatformError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    assert!(model::edges_in_bounds(), "cube edge table is out of bounds");

    let main_window = WindowDesc::new(CubeWidget::new())
        .title(LocalizedString::new("3D Rotating Cube"))
        .window_size((WINDOW_WIDTH, WINDOW_HEIGHT))
        .resizable(false);

    tracing::info!("opening {WINDOW_WIDTH}x{WINDOW_HEIGHT} window");
    AppLauncher::with_window(main_window).launch(Rotation::default())?;
    tracing::info!("window closed, exiting");

    Ok(())
}
