//! Demo walking the highlighter through its states against the in-memory scene.
//!
//! Run with: cargo run -p glint-scene
//!
//! Set RUST_LOG=debug to see the highlighter's own transition logging.

use std::cell::RefCell;
use std::rc::Rc;

use glint_core::{Highlighter, SurfaceError, config};
use glint_scene::MemoryScene;
use glint_types::{EntityProperties, Vec3};

use tracing_subscriber::filter::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn log_scene(scene: &Rc<RefCell<MemoryScene>>, step: &str) {
    let scene = scene.borrow();
    for (handle, state) in scene.overlays() {
        tracing::info!(
            step,
            %handle,
            kind = %state.kind,
            visible = state.descriptor.visible,
            position = %state.descriptor.position,
            size = state.descriptor.size,
            "overlay state"
        );
    }
}

fn run() -> Result<(), SurfaceError> {
    let appearance = match config::load() {
        Ok(config) => config.descriptor,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using default appearance");
            glint_types::OverlayDescriptor::default()
        }
    };

    let scene = Rc::new(RefCell::new(MemoryScene::new()));
    scene.borrow_mut().insert_entity(
        "magstick-red",
        EntityProperties::at(Vec3::new(1.0, 2.0, 3.0)),
    );
    scene.borrow_mut().insert_entity(
        "magstick-blue",
        EntityProperties::at(Vec3::new(4.0, 5.0, 6.0)),
    );

    let mut highlighter = Highlighter::with_descriptor(scene.clone(), scene.clone(), appearance)?;
    log_scene(&scene, "created");

    highlighter.highlight(Some("magstick-red".into()))?;
    log_scene(&scene, "select red");

    // Same id again: no-op, the overlay does not move or re-render
    highlighter.highlight(Some("magstick-red".into()))?;
    log_scene(&scene, "re-select red");

    highlighter.highlight(Some("magstick-blue".into()))?;
    log_scene(&scene, "select blue");

    highlighter.set_size(1.8)?;
    log_scene(&scene, "grow");

    highlighter.clear()?;
    log_scene(&scene, "clear");

    highlighter.release()?;
    tracing::info!(
        remaining = scene.borrow().overlay_count(),
        "released highlighter"
    );
    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        tracing::error!(error = %e, "demo failed");
        std::process::exit(1);
    }
}
