//! Subcommand implementations.

use marble_common::MarbleError;
use marble_config::MarbleConfig;
use marble_renderer::{SphereMesh, SphereVertex, Triangle};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::scene::Scene;
use crate::script::{load_script, ScriptedEvent};

/// Simulate `frames` frames of `dt` seconds, injecting `script` events at
/// the start of their frame. Events are replayed in frame order whatever
/// order `script` lists them in. Stops early when Escape is seen.
pub fn simulate(
    config: &MarbleConfig,
    frames: u32,
    dt: f64,
    script: &[ScriptedEvent],
) -> marble_common::Result<Scene> {
    if dt.is_nan() || dt <= 0.0 {
        return Err(MarbleError::Other(format!(
            "frame time must be positive, got {dt}"
        )));
    }

    let mut scene = Scene::from_config(config, 0.0)?;
    let mut ordered: Vec<&ScriptedEvent> = script.iter().collect();
    ordered.sort_by_key(|s| s.frame);
    let mut pending = ordered.into_iter().peekable();

    for frame in 0..frames {
        while let Some(scripted) = pending.next_if(|s| s.frame <= frame) {
            scene.input.push(scripted.event);
        }

        scene.frame(f64::from(frame + 1) * dt);

        if scene.should_close() {
            info!(frame, "close requested, stopping");
            break;
        }
    }

    let skipped = pending.count();
    if skipped > 0 {
        warn!(skipped, "script events past the last frame were not replayed");
    }
    Ok(scene)
}

pub fn run(
    config: &MarbleConfig,
    frames: u32,
    dt: f64,
    script: Option<&Path>,
) -> marble_common::Result<()> {
    let events = match script {
        Some(path) => {
            let events = load_script(path)?;
            info!(count = events.len(), "loaded input script from {}", path.display());
            events
        }
        None => Vec::new(),
    };

    let scene = simulate(config, frames, dt, &events)?;

    let camera = &scene.camera;
    info!(
        triangles = scene.mesh.triangles().len(),
        fps = scene.clock.fps(),
        elapsed = scene.clock.elapsed(),
        "simulation finished"
    );
    println!("location:  {:?}", camera.location.to_array());
    println!("direction: {:?}", camera.direction.to_array());
    println!("up:        {:?}", camera.up.to_array());
    println!("view-projection:");
    print!(
        "{}",
        marble_renderer::transforms::format_matrix(&camera.view_projection())
    );
    Ok(())
}

#[derive(Serialize)]
struct MeshExport<'a> {
    resolution: u32,
    vertices: &'a [SphereVertex],
    triangles: &'a [Triangle],
}

/// Write the mesh buffers as pretty JSON.
pub fn export_mesh(mesh: &SphereMesh, path: &Path) -> marble_common::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let export = MeshExport {
        resolution: mesh.resolution(),
        vertices: mesh.vertices(),
        triangles: mesh.triangles(),
    };
    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| MarbleError::Export(format!("{}: {e}", path.display())))?;
    writer.flush()?;
    Ok(())
}

pub fn mesh(
    config: &MarbleConfig,
    resolution: Option<u32>,
    output: Option<&Path>,
) -> marble_common::Result<()> {
    let resolution = match resolution {
        Some(resolution) => {
            // Overrides go through the same range check as the config file.
            let mut checked = config.clone();
            checked.sphere.resolution = resolution;
            marble_config::validation::validate(&checked)?;
            resolution
        }
        None => config.sphere.resolution,
    };
    let mesh = SphereMesh::generate(resolution)?;

    println!("resolution: {}", mesh.resolution());
    println!("vertices:   {}", mesh.vertices().len());
    println!("triangles:  {}", mesh.triangles().len());
    println!("indices:    {}", mesh.index_count());
    println!(
        "bytes:      {} vertex + {} index",
        std::mem::size_of_val(mesh.vertices()),
        std::mem::size_of_val(mesh.triangles())
    );

    if let Some(path) = output {
        export_mesh(&mesh, path)?;
        info!("wrote mesh to {}", path.display());
    }
    Ok(())
}

pub fn transforms() {
    print!("{}", marble_renderer::transforms::walkthrough());
}

pub fn print_config(config: &MarbleConfig) {
    println!("{}", marble_config::config_to_json(config));
}
