use crate::input::ParseError;
use crate::model::grid::PlateGridModel;
use crate::render::{PlatePage, RenderContext, render_plate};

/// Renders one page per plate, in ascending plate-id order.
pub fn run_stage2(
    grid: &PlateGridModel,
    ctx: &RenderContext<'_>,
) -> Result<Vec<PlatePage>, ParseError> {
    let mut pages = Vec::with_capacity(grid.plate_count());
    for (plate_id, plate) in grid.plates() {
        tracing::info!("creating images for plate {plate_id}");
        pages.push(render_plate(plate_id, plate, ctx)?);
    }
    Ok(pages)
}
