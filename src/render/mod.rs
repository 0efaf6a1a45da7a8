use std::fmt;

use crate::input::{ParseError, WellCoord};
use crate::model::geometry::CanvasGeometry;
use crate::model::grid::PlateGrid;
use crate::model::locus::{RemovalSet, UnmarkedProbePolicy, is_removed};

pub mod svg;

use svg::SvgWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GRAY: Rgb = Rgb(127, 127, 127);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const EMPTY_WELL_COLOR: Rgb = Rgb::GRAY;
pub const OUTLINE_COLOR: Rgb = Rgb::BLACK;
pub const TEXT_COLOR: Rgb = Rgb::BLACK;
pub const BACKGROUND_COLOR: Rgb = Rgb::WHITE;

pub const HEADER_FONT_PX: f64 = 100.0;
pub const LABEL_FONT_PX: f64 = 60.0;

/// Which class of well is drawn dark. Applies to every plate of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Kept wells dark, removed wells light.
    #[default]
    KeepHighlighted,
    /// Removed wells dark, kept wells light.
    RemoveHighlighted,
}

impl ColorMode {
    pub fn from_keep_flag(keep: bool) -> Self {
        if keep {
            ColorMode::RemoveHighlighted
        } else {
            ColorMode::KeepHighlighted
        }
    }

    pub fn keep_color(self) -> Rgb {
        match self {
            ColorMode::KeepHighlighted => Rgb::BLACK,
            ColorMode::RemoveHighlighted => Rgb::WHITE,
        }
    }

    pub fn remove_color(self) -> Rgb {
        match self {
            ColorMode::KeepHighlighted => Rgb::WHITE,
            ColorMode::RemoveHighlighted => Rgb::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellState {
    Empty,
    Kept,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellMarker {
    pub well: WellCoord,
    pub state: WellState,
    pub fill: Rgb,
}

/// Run-scoped, read-only inputs shared by every plate render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub geometry: CanvasGeometry,
    pub colors: ColorMode,
    pub removal_set: &'a RemovalSet,
    pub locus_unit: usize,
    pub unmarked_probe: UnmarkedProbePolicy,
}

/// One rendered plate: the SVG page plus what was drawn in each well.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatePage {
    pub plate_id: String,
    pub width: u32,
    pub height: u32,
    pub svg: String,
    pub markers: Vec<WellMarker>,
    pub removed_wells: usize,
    pub removed_loci: usize,
}

impl PlatePage {
    #[cfg(test)]
    pub fn marker(&self, well: WellCoord) -> Option<&WellMarker> {
        self.markers.iter().find(|m| m.well == well)
    }
}

pub fn removed_count_label(removed_loci: usize) -> String {
    format!("Count of Loci Removed = {removed_loci}")
}

pub fn render_plate(
    plate_id: &str,
    grid: &PlateGrid,
    ctx: &RenderContext<'_>,
) -> Result<PlatePage, ParseError> {
    let geo = &ctx.geometry;
    let dims = geo.dims;
    let mut page = SvgWriter::new(geo.width, geo.height, BACKGROUND_COLOR);

    page.text(geo.header_anchor(), HEADER_FONT_PX, TEXT_COLOR, plate_id);
    for row in 0..dims.rows {
        let label = crate::input::well::row_letter(row).to_string();
        page.text(geo.row_label_anchor(row), LABEL_FONT_PX, TEXT_COLOR, &label);
    }
    for col in 0..dims.cols {
        let label = (col + 1).to_string();
        page.text(geo.column_label_anchor(col), LABEL_FONT_PX, TEXT_COLOR, &label);
    }

    let mut markers = Vec::with_capacity(dims.rows * dims.cols);
    let mut removed_wells = 0usize;
    for well in dims.wells() {
        let (state, fill) = match grid.get(well) {
            None => (WellState::Empty, EMPTY_WELL_COLOR),
            Some(name) => {
                if is_removed(name, ctx.removal_set, ctx.unmarked_probe)? {
                    removed_wells += 1;
                    (WellState::Removed, ctx.colors.remove_color())
                } else {
                    (WellState::Kept, ctx.colors.keep_color())
                }
            }
        };
        page.ellipse(&geo.marker_box(well), fill, OUTLINE_COLOR);
        markers.push(WellMarker { well, state, fill });
    }

    // A locus spans `locus_unit` probe wells; the annotation counts loci.
    let removed_loci = removed_wells / ctx.locus_unit.max(1);
    page.text(
        geo.count_anchor(),
        LABEL_FONT_PX,
        TEXT_COLOR,
        &removed_count_label(removed_loci),
    );

    tracing::debug!(
        plate = plate_id,
        wells = grid.len(),
        removed_wells,
        removed_loci,
        "rendered plate page"
    );

    Ok(PlatePage {
        plate_id: plate_id.to_string(),
        width: geo.width,
        height: geo.height,
        svg: page.finish(),
        markers,
        removed_wells,
        removed_loci,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/tests.rs"]
mod tests;
