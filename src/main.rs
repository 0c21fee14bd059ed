use anyhow::Context;
use matvis::settings::{InspectSettings, Settings};
use matvis::{Animation, Decoder, Mesh};
use serde::Serialize;

#[derive(Serialize)]
struct Report {
    meshes: Vec<Mesh>,
    animations: Vec<Animation>,
}

fn print_values(label: &str, values: &[f32], stride: usize, settings: &InspectSettings) {
    if values.is_empty() {
        return;
    }
    println!("\n[{label}]");
    for row in values.chunks(stride).take(settings.max_values) {
        let row: Vec<String> = row.iter().map(|v| format!("{v:.5}")).collect();
        println!("{}", row.join(", "));
    }
    let rows = values.len().div_ceil(stride);
    if rows > settings.max_values {
        println!("... {} more", rows - settings.max_values);
    }
}

fn print_mesh(index: usize, mesh: &Mesh, settings: &InspectSettings) {
    println!(
        "\nmesh {index}: {:?}, {} vertices, {} normals, {} tint, {} texcoords, {} skin",
        mesh.name_str().unwrap_or_default(),
        mesh.vertex_count(),
        mesh.normal_size() / 3,
        mesh.tint_size(),
        mesh.tex_coord_size() / 2,
        mesh.skin_size()
    );
    if !settings.show_values {
        return;
    }
    let empty = Vec::new();
    print_values("VERTICES", mesh.vertices.as_ref().unwrap_or(&empty), 3, settings);
    print_values("NORMALS", mesh.normals.as_ref().unwrap_or(&empty), 3, settings);
    print_values("TEXTURES", mesh.tex_coords.as_ref().unwrap_or(&empty), 2, settings);
}

fn print_animation(index: usize, animation: &Animation, settings: &InspectSettings) {
    println!(
        "\nanimation {index}: {:?}, {} keyframes, duration {:.3}",
        animation.name_str().unwrap_or_default(),
        animation.frame_count(),
        animation.duration()
    );
    if !settings.show_values {
        return;
    }
    print_values("TIMES", animation.times(), 1, settings);
    println!("\n[ROOT AT START]\n{}", animation.pose_matrix(0.0, 0));
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("matvis-rs", String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().skip(2).any(|a| a == flag)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!(
            "usage: {} <file.mat> [--json] [--save-settings]",
            program_name(&args)
        );
        std::process::exit(2);
    };

    let mut settings = Settings::load();
    if has_flag(&args, "--json") {
        settings.inspect.json = true;
    }
    if has_flag(&args, "--save-settings") {
        settings.save().context("failed to save settings")?;
    }

    let mut decoder = Decoder::open_with(path, &settings.decoder)
        .with_context(|| format!("failed to open '{path}'"))?;
    log::info!("{path}: {:?}", decoder.schema());

    let meshes = decoder
        .meshes()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to decode meshes in '{path}'"))?;
    let animations = decoder
        .animations()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to decode animations in '{path}'"))?;

    if settings.inspect.json {
        let report = Report { meshes, animations };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{path}: {} meshes, {} animations", meshes.len(), animations.len());
    for (i, mesh) in meshes.iter().enumerate() {
        print_mesh(i, mesh, &settings.inspect);
    }
    for (i, animation) in animations.iter().enumerate() {
        print_animation(i, animation, &settings.inspect);
    }

    Ok(())
}
