//! Prints the hatch of a rectangle with a hole as one `x0 y0 x1 y1` line per segment.
//!
//! Usage:
//! ```text
//! cargo run --example hatch                    # 45 degrees, spacing 1
//! cargo run --example hatch -- 30 0.5          # angle, spacing
//! RUST_LOG=geolis_planar=trace cargo run --example hatch
//! ```

use geolis_planar::{Hatch, HatchParams, Point2, Rectangle, Result, Vector2};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the kernel.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geolis_planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let defaults = HatchParams::default();
    let angle = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(defaults.angle_degrees);
    let spacing = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(defaults.spacing);

    let outer = Rectangle::new(Point2::new(0.0, 0.0), Vector2::new(20.0, 10.0))?;
    let hole = Rectangle::new(Point2::new(6.0, 3.0), Vector2::new(8.0, 4.0))?;
    let params = defaults.angle(angle).spacing(spacing);

    for s in Hatch::new(outer, Some(hole), params).execute()? {
        println!("{:.4} {:.4} {:.4} {:.4}", s.p0.x, s.p0.y, s.p1.x, s.p1.y);
    }
    Ok(())
}
