mod scene;

use anyhow::{Context, Result};

use softgpu_engine::exec::{Triangle, execute_into};
use softgpu_engine::logging::{LoggingConfig, init_logging};
use softgpu_engine::memory::{Framebuffer, GpuLimits, GpuMemory};

const WIDTH: u32 = 160;
const HEIGHT: u32 = 120;

fn main() -> Result<()> {
    let verbose = std::env::var_os("SOFTGPU_TRACE_TRIANGLES").is_some();
    init_logging(LoggingConfig { trace_triangles: verbose, ..LoggingConfig::default() });

    let out_path = std::env::args().nth(1).unwrap_or_else(|| "softgpu-frame.png".to_string());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          SOFTGPU STUDIO v0.1           ║");
    println!("  ║   memory image  ·  command interpreter ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let fb = Framebuffer::new(WIDTH, HEIGHT, 4).context("creating framebuffer")?;
    let mut mem = GpuMemory::new(GpuLimits::default(), fb);
    scene::populate(&mut mem).context("populating memory image")?;

    let cb = scene::record();
    let mut triangles: Vec<(u32, Triangle)> = Vec::new();
    let stats = execute_into(&mut mem, &cb, &mut triangles).context("executing command buffer")?;

    log::info!(
        "executed {} commands: {} clears, {} draws, {} triangles, {} vertex invocations",
        cb.len(),
        stats.clears,
        stats.draws,
        stats.triangles,
        stats.vertex_invocations
    );
    for (draw_id, tri) in triangles.iter().take(2) {
        log::info!("draw {draw_id}: first triangle {:?}", tri.vertices.map(|v| v.gl_position.to_array()));
    }

    let mut color = mem.framebuffer().color().to_vec();
    scene::plot_vertices(
        &mut color,
        WIDTH,
        HEIGHT,
        triangles.iter().flat_map(|(_, t)| t.vertices),
    );

    image::save_buffer(&out_path, &color, WIDTH, HEIGHT, image::ColorType::Rgba8)
        .with_context(|| format!("writing {out_path}"))?;
    println!("  Frame written to {out_path}");
    println!();

    Ok(())
}
