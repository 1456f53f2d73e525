//! Scatter plot rasterization and PNG encoding.
use super::Axis;
use super::Plot;
use plotters::prelude::*;

#[rustfmt::skip]
pub const WIDTH:  u32 = 640;
#[rustfmt::skip]
pub const HEIGHT: u32 = 480;

/// The eight-byte signature every PNG stream starts with.
pub const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Draw one point per row and encode the chart as PNG.
///
/// The returned buffer holds a complete PNG stream starting at offset 0.
pub fn render(plot: &Plot, x: &Axis, y: &Axis) -> anyhow::Result<Vec<u8>> {
    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    draw(&mut pixels, plot, x, y)?;
    let image = ::image::RgbImage::from_raw(WIDTH, HEIGHT, pixels)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {}x{}", WIDTH, HEIGHT))?;
    let mut png = std::io::Cursor::new(Vec::new());
    image.write_to(&mut png, ::image::ImageFormat::Png)?;
    Ok(png.into_inner())
}

fn draw(pixels: &mut [u8], plot: &Plot, x: &Axis, y: &Axis) -> anyhow::Result<()> {
    let root = BitMapBackend::with_buffer(pixels, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(plot.title(), ("sans-serif", 20))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x.range()?, y.range()?)?;
    let x_label = |at: &f64| x.label(*at);
    let y_label = |at: &f64| y.label(*at);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(plot.x())
        .y_desc(plot.y())
        .x_labels(x.ticks())
        .y_labels(y.ticks())
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .draw()?;
    chart.draw_series(
        x.values()
            .iter()
            .zip(y.values())
            .map(|(a, b)| Circle::new((*a, *b), 3, BLUE.mix(0.7).filled())),
    )?;
    root.present()?;
    Ok(())
}
