//! Demo binary that builds a planet surface and reports statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p orbis-demo` for the defaults, or
//! `cargo run -p orbis-demo -- --radius 25 --grid-resolution 32` to override.

use std::path::PathBuf;

use clap::Parser;
use orbis_config::{CliArgs, Config};
use orbis_cubesphere::Face;
use orbis_planet::{MaterialHandle, Planet};
use tracing::info;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("orbis"))
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config, falling back to defaults: {e}");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    orbis_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    let mut planet = match Planet::new(
        config.planet.radius,
        config.planet.spherized,
        config.planet.grid_resolution,
    ) {
        Ok(planet) => planet
            .with_material(MaterialHandle(config.planet.material_index))
            .with_auto_update(config.planet.auto_update),
        Err(e) => {
            eprintln!("Invalid planet configuration: {e}");
            std::process::exit(1);
        }
    };

    info!(
        radius = planet.radius(),
        spherized = planet.spherized(),
        grid_resolution = planet.grid_resolution(),
        max_depth = planet.max_depth(),
        "Building planet surface"
    );

    planet.generate();

    report_surface_stats(&planet);
    if planet.spherized() {
        verify_spherized_radii(&planet);
    }
    demonstrate_regeneration(&mut planet);
    maybe_reload(&mut planet, &config, &config_dir);
}

/// Log per-face and whole-planet mesh statistics.
fn report_surface_stats(planet: &Planet) {
    let roots = planet.roots().expect("planet was just generated");

    for root in roots {
        let mut vertices = 0usize;
        let mut triangles = 0usize;
        root.for_each_leaf(&mut |leaf| {
            if let Some(mesh) = leaf.mesh() {
                vertices += mesh.vertex_count();
                triangles += mesh.triangle_count();
            }
        });
        info!(
            "  Face {}: {} leaves, {} vertices, {} triangles",
            root.face().label(),
            root.leaf_count(),
            vertices,
            triangles
        );
    }

    let upload_vertices: usize = planet
        .leaf_meshes()
        .iter()
        .map(|(_, mesh)| mesh.to_vertices().len())
        .sum();
    info!(
        "Planet total: {} leaves across {} faces, {} GPU vertices ({} bytes interleaved)",
        planet.leaf_count(),
        Face::ALL.len(),
        upload_vertices,
        upload_vertices * core::mem::size_of::<orbis_mesh::SurfaceVertex>()
    );
}

/// Verify every emitted vertex sits on the sphere.
fn verify_spherized_radii(planet: &Planet) {
    let radius = planet.radius();
    let mut max_deviation: f64 = 0.0;
    let mut checked = 0usize;

    for (_, mesh) in planet.leaf_meshes() {
        for position in &mesh.positions {
            max_deviation = max_deviation.max((position.length() - radius).abs());
            checked += 1;
        }
    }

    info!(
        "Spherized check: {} vertices, max radius deviation {:.2e}",
        checked, max_deviation
    );
}

/// Rebuild the surface and confirm the tree comes out structurally identical.
fn demonstrate_regeneration(planet: &mut Planet) {
    let leaves_before = planet.leaf_count();
    planet.generate();
    let leaves_after = planet.leaf_count();
    info!(
        "Regeneration: {} leaves before, {} after (identical = {})",
        leaves_before,
        leaves_after,
        leaves_before == leaves_after
    );
}

/// If auto-update is enabled, pick up external config edits and regenerate.
fn maybe_reload(planet: &mut Planet, config: &Config, config_dir: &std::path::Path) {
    if !planet.auto_update() {
        return;
    }
    match config.reload(config_dir) {
        Ok(Some(new_config)) => {
            match Planet::new(
                new_config.planet.radius,
                new_config.planet.spherized,
                new_config.planet.grid_resolution,
            ) {
                Ok(rebuilt) => {
                    *planet = rebuilt
                        .with_material(MaterialHandle(new_config.planet.material_index))
                        .with_auto_update(new_config.planet.auto_update);
                    planet.generate();
                    info!("Auto-update: config changed, surface regenerated");
                }
                Err(e) => info!("Auto-update: new config invalid, keeping old surface ({e})"),
            }
        }
        Ok(None) => info!("Auto-update: config unchanged"),
        Err(e) => info!("Auto-update: reload failed ({e})"),
    }
}
