//! shapedraw - sample a scene description and print its points
//!
//! Usage: `shapedraw <scene.json> [step_size]`
//!
//! Renderer settings are read from the platform config directory. Each
//! sampled point is written to stdout as one JSON object per line.

use std::io::{self, BufWriter, Write};

use shapedraw::{Point3, PointConsumer, RendererSettings, SceneDescription, ShapeRenderer};

/// Writes each point as a JSON line, remembering the first write error
struct JsonLines<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> PointConsumer for JsonLines<W> {
    fn consume(&mut self, point: Point3) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, &point)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Starting shapedraw");

    let mut args = std::env::args().skip(1);
    let Some(scene_path) = args.next() else {
        eprintln!("usage: shapedraw <scene.json> [step_size]");
        std::process::exit(2);
    };

    let description = SceneDescription::from_json(&std::fs::read_to_string(&scene_path)?)?;
    let scene = description.build()?;
    log::info!("Loaded scene '{}' with {} shapes", description.name, scene.len());

    let stdout = io::stdout();
    let mut renderer = ShapeRenderer::new(JsonLines {
        out: BufWriter::new(stdout.lock()),
        error: None,
    });
    RendererSettings::load().apply(&mut renderer)?;

    if let Some(step) = args.next() {
        renderer.set_step_size(step.parse()?)?;
    }

    renderer.draw_shape(&scene)?;

    let mut sink = renderer.into_consumer();
    if let Some(e) = sink.error.take() {
        return Err(e.into());
    }
    sink.out.flush()?;
    Ok(())
}
