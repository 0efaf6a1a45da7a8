use super::*;
use crate::input::probes::ProbeRecord;
use crate::model::geometry::PlateDimensions;
use crate::model::grid::PlateGridModel;

fn grid_of(wells: &[(usize, usize, &str)]) -> PlateGridModel {
    let records: Vec<ProbeRecord> = wells
        .iter()
        .enumerate()
        .map(|(i, (row, col, name))| ProbeRecord {
            plate_id: "P1".to_string(),
            well: WellCoord::new(*row, *col),
            probe_name: name.to_string(),
            line: i + 2,
        })
        .collect();
    PlateGridModel::build(&records)
}

fn context(removal_set: &RemovalSet, colors: ColorMode, locus_unit: usize) -> RenderContext<'_> {
    RenderContext {
        geometry: CanvasGeometry::new(PlateDimensions::new(2, 2), 400, 400),
        colors,
        removal_set,
        locus_unit,
        unmarked_probe: UnmarkedProbePolicy::Error,
    }
}

#[test]
fn test_color_modes_are_inverse() {
    let keep = ColorMode::from_keep_flag(false);
    assert_eq!(keep, ColorMode::KeepHighlighted);
    assert_eq!(keep.keep_color(), Rgb::BLACK);
    assert_eq!(keep.remove_color(), Rgb::WHITE);

    let remove = ColorMode::from_keep_flag(true);
    assert_eq!(remove, ColorMode::RemoveHighlighted);
    assert_eq!(remove.keep_color(), Rgb::WHITE);
    assert_eq!(remove.remove_color(), Rgb::BLACK);
    assert_eq!(Rgb::GRAY.to_string(), "#7f7f7f");
}

#[test]
fn test_every_cell_is_empty_kept_or_removed() {
    let model = grid_of(&[(0, 0, "locA_LHS"), (0, 1, "locB_LHS"), (1, 0, "locA_RHS")]);
    let removal: RemovalSet = ["locA_"].into_iter().collect();
    let ctx = context(&removal, ColorMode::KeepHighlighted, 1);

    let page = render_plate("P1", model.plate("P1").unwrap(), &ctx).unwrap();
    assert_eq!(page.markers.len(), 4);

    let a1 = page.marker(WellCoord::new(0, 0)).unwrap();
    assert_eq!(a1.state, WellState::Removed);
    assert_eq!(a1.fill, ctx.colors.remove_color());

    let a2 = page.marker(WellCoord::new(0, 1)).unwrap();
    assert_eq!(a2.state, WellState::Kept);
    assert_eq!(a2.fill, ctx.colors.keep_color());

    let b1 = page.marker(WellCoord::new(1, 0)).unwrap();
    assert_eq!(b1.state, WellState::Removed);

    let b2 = page.marker(WellCoord::new(1, 1)).unwrap();
    assert_eq!(b2.state, WellState::Empty);
    assert_eq!(b2.fill, EMPTY_WELL_COLOR);

    assert_eq!(page.removed_wells, 2);
    assert_eq!(page.removed_loci, 2);
}

#[test]
fn test_removed_count_divides_by_locus_unit() {
    let model = grid_of(&[
        (0, 0, "locA_LHS"),
        (0, 1, "locA_RHS"),
        (1, 0, "locB_LHS"),
        (1, 1, "locC_LHS"),
    ]);
    let removal: RemovalSet = ["locA_", "locB_"].into_iter().collect();
    let plate = model.plate("P1").unwrap();

    let page = render_plate("P1", plate, &context(&removal, ColorMode::default(), 2)).unwrap();
    assert_eq!(page.removed_wells, 3);
    assert_eq!(page.removed_loci, 1);
    assert!(page.svg.contains(">Count of Loci Removed = 1</text>"));

    let page = render_plate("P1", plate, &context(&removal, ColorMode::default(), 4)).unwrap();
    assert_eq!(page.removed_loci, 0);
}

#[test]
fn test_page_draws_labels_and_markers() {
    let model = grid_of(&[(0, 0, "locA_LHS")]);
    let removal = RemovalSet::default();
    let ctx = context(&removal, ColorMode::RemoveHighlighted, 1);
    let page = render_plate("PL<7>", model.plate("P1").unwrap(), &ctx).unwrap();

    assert_eq!(page.plate_id, "PL<7>");
    assert_eq!((page.width, page.height), (600, 800));
    assert!(page.svg.contains(">PL&lt;7&gt;</text>"));
    for label in [">A</text>", ">B</text>", ">1</text>", ">2</text>"] {
        assert!(page.svg.contains(label), "missing {label}");
    }
    assert_eq!(page.svg.matches("<ellipse").count(), 4);
    // kept wells are white in remove-highlighted mode
    assert!(page.svg.contains(r##"fill="#ffffff" stroke="#000000"/>"##));
    assert_eq!(page.svg.matches(r##"fill="#7f7f7f""##).count(), 3);
}

#[test]
fn test_out_of_range_wells_are_not_drawn() {
    let model = grid_of(&[(0, 0, "locA_LHS"), (5, 5, "locZ_LHS")]);
    let removal: RemovalSet = ["locZ_"].into_iter().collect();
    let ctx = context(&removal, ColorMode::KeepHighlighted, 1);
    let page = render_plate("P1", model.plate("P1").unwrap(), &ctx).unwrap();
    assert_eq!(page.markers.len(), 4);
    assert_eq!(page.removed_wells, 0);
}

#[test]
fn test_unmarked_probe_fails_render() {
    let model = grid_of(&[(0, 0, "no_marker")]);
    let removal = RemovalSet::default();
    let ctx = context(&removal, ColorMode::KeepHighlighted, 1);
    let err = render_plate("P1", model.plate("P1").unwrap(), &ctx).unwrap_err();
    assert_eq!(err, ParseError::UnmarkedProbe("no_marker".to_string()));

    let lenient = RenderContext {
        unmarked_probe: UnmarkedProbePolicy::WholeName,
        ..ctx
    };
    let page = render_plate("P1", model.plate("P1").unwrap(), &lenient).unwrap();
    assert_eq!(page.marker(WellCoord::new(0, 0)).unwrap().state, WellState::Kept);
}
