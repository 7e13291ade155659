use crate::aggregation::BinPaths;
use crate::geometry::primitives::Point;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws all paths of a single bin: the container, its defects and the placed items.
pub fn bin_to_svg(bin_paths: &BinPaths, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let fill_rule = format!("{}", options.fill_rule);

    let (x_min, y_min, x_max, y_max) = bbox(bin_paths);
    let (width, height) = (x_max - x_min, y_max - y_min);
    let min_dim = f64::min(width, height);

    //10% margin around the drawing
    let vbox = (
        (x_min - 0.05 * width) as f32,
        (y_min - 0.05 * height) as f32,
        (1.10 * width) as f32,
        (1.10 * height) as f32,
    );
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the bin
        let label_content = format!(
            "bin: {} | items: {} | {}",
            bin_paths.bin,
            bin_paths.items.n_subpaths(),
            title,
        );
        Text::new(label_content)
            .set("x", x_min as f32)
            .set("y", (y_min - 0.5 * 0.025 * min_dim) as f32)
            .set("font-size", (min_dim * 0.025) as f32)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container_group = Group::new()
        .set("id", format!("bin_{}", bin_paths.bin))
        .add(svg_util::data_to_path(
            svg_util::path_data(&bin_paths.container),
            &[
                ("fill", &*format!("{}", theme.container_fill)),
                ("fill-rule", &*fill_rule),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "bin {}, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            bin_paths.bin, x_min, y_min, x_max, y_max
        )));

    let defects_group = Group::new().set("id", "defects").add(svg_util::data_to_path(
        svg_util::path_data(&bin_paths.defects),
        &[
            ("fill", &*format!("{}", theme.defect_fill)),
            ("fill-rule", &*fill_rule),
            ("stroke", "black"),
            ("stroke-width", &*format!("{}", stroke_width)),
        ],
    ));

    let items_group = Group::new().set("id", "items").add(svg_util::data_to_path(
        svg_util::path_data(&bin_paths.items),
        &[
            ("fill", &*format!("{}", theme.item_fill)),
            ("fill-opacity", &*format!("{}", theme.item_fill_opacity)),
            ("fill-rule", &*fill_rule),
            ("stroke", "black"),
            ("stroke-width", &*format!("{}", stroke_width)),
        ],
    ));

    let labels_group = match options.labels {
        false => Group::new().set("id", "labels"),
        true => bin_paths
            .labels
            .iter()
            .fold(Group::new().set("id", "labels"), |group, label| {
                let Point(x, y) = label.position;
                group.add(
                    Text::new(format!("{}", label.id))
                        .set("x", x as f32)
                        .set("y", y as f32)
                        .set("font-size", (min_dim * 0.02) as f32)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                )
            }),
    };

    Document::new()
        .set("viewBox", vbox)
        .add(container_group)
        .add(defects_group)
        .add(items_group)
        .add(labels_group)
        .add(label)
}

/// Bounding box over every point of the bin, falls back to the unit square for an empty bin
fn bbox(bin_paths: &BinPaths) -> (f64, f64, f64, f64) {
    let points = [&bin_paths.container, &bin_paths.defects, &bin_paths.items]
        .into_iter()
        .flat_map(|p| p.nodes().iter().flatten());

    let bbox = points.fold(None, |bbox: Option<(f64, f64, f64, f64)>, Point(x, y)| {
        Some(match bbox {
            None => (*x, *y, *x, *y),
            Some((x_min, y_min, x_max, y_max)) => {
                (x_min.min(*x), y_min.min(*y), x_max.max(*x), y_max.max(*y))
            }
        })
    });

    match bbox {
        Some((x_min, y_min, x_max, y_max)) if x_max > x_min && y_max > y_min => {
            (x_min, y_min, x_max, y_max)
        }
        _ => (0.0, 0.0, 1.0, 1.0),
    }
}
