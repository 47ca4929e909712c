use color_lib::{to_string, Palette};
use svg::node::element::path::Data;
use svg::node::element::{
    Circle, Definitions, Filter, FilterEffectGaussianBlur, FilterEffectMerge,
    FilterEffectMergeNode, Group, Line, LinearGradient, Path, Pattern, Rectangle, Stop,
};
use svg::Document;

pub const SIZE: u32 = 1024;
const CORNER_RADIUS: u32 = 180;

const HEX_PATTERN_ID: &str = "hexPattern";
const GLOW_FILTER_ID: &str = "greenGlow";
const ARMOR_GRADIENT_ID: &str = "armorGradient";

fn url(id: &str) -> String {
    format!("url(#{})", id)
}

// Honeycomb tile in the style of the MAGI displays.
fn make_hex_pattern(palette: &Palette) -> Pattern {
    let data = Data::new()
        .move_to((40, 0))
        .line_to((80, 23.09))
        .line_to((80, 69.28))
        .line_to((40, 92.37))
        .line_to((0, 69.28))
        .line_to((0, 23.09))
        .close();

    let hexagon = Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", to_string(&palette.grid))
        .set("stroke-width", 1.5)
        .set("opacity", 0.3);

    Pattern::new()
        .set("id", HEX_PATTERN_ID)
        .set("x", 0)
        .set("y", 0)
        .set("width", 80)
        .set("height", 138.56)
        .set("patternUnits", "userSpaceOnUse")
        .add(hexagon)
}

fn make_glow_filter() -> Filter {
    let merge = FilterEffectMerge::new()
        .add(FilterEffectMergeNode::new().set("in", "coloredBlur"))
        .add(FilterEffectMergeNode::new().set("in", "SourceGraphic"));

    Filter::new()
        .set("id", GLOW_FILTER_ID)
        .add(
            FilterEffectGaussianBlur::new()
                .set("stdDeviation", 8)
                .set("result", "coloredBlur"),
        )
        .add(merge)
}

fn make_stop(offset: &str, color: &color_lib::sRGB) -> Stop {
    Stop::new()
        .set("offset", offset)
        .set("style", format!("stop-color:{};stop-opacity:1", to_string(color)))
}

fn make_armor_gradient(palette: &Palette) -> LinearGradient {
    LinearGradient::new()
        .set("id", ARMOR_GRADIENT_ID)
        .set("x1", "0%")
        .set("y1", "0%")
        .set("x2", "0%")
        .set("y2", "100%")
        .add(make_stop("0%", &palette.purple))
        .add(make_stop("100%", &palette.dark_purple))
}

fn make_background<T: Into<svg::node::Value>>(fill: T) -> Rectangle {
    Rectangle::new()
        .set("width", SIZE)
        .set("height", SIZE)
        .set("fill", fill)
        .set("rx", CORNER_RADIUS)
}

// V-shaped chest plate.
fn make_armor(palette: &Palette) -> Path {
    let data = Data::new()
        .move_to((150, 220))
        .line_to((874, 220))
        .quadratic_curve_to((900, 220, 900, 246))
        .line_to((850, 820))
        .quadratic_curve_to((850, 850, 820, 870))
        .line_to((550, 980))
        .quadratic_curve_to((512, 1000, 474, 980))
        .line_to((204, 870))
        .quadratic_curve_to((174, 850, 174, 820))
        .line_to((124, 246))
        .quadratic_curve_to((124, 220, 150, 220))
        .close();

    Path::new()
        .set("d", data)
        .set("fill", url(ARMOR_GRADIENT_ID))
        .set("stroke", to_string(&palette.dark_purple))
        .set("stroke-width", 8)
}

fn make_center_line(palette: &Palette) -> Line {
    Line::new()
        .set("x1", 512)
        .set("y1", 280)
        .set("x2", 512)
        .set("y2", 950)
        .set("stroke", to_string(&palette.dark_purple))
        .set("stroke-width", 4)
        .set("opacity", 0.6)
}

// Glowing visor band across the top of the armor.
fn make_visor(palette: &Palette) -> Group {
    let band = Data::new()
        .move_to((200, 280))
        .line_to((824, 280))
        .line_to((780, 360))
        .line_to((244, 360))
        .close();

    Group::new()
        .set("filter", url(GLOW_FILTER_ID))
        .add(
            Path::new()
                .set("d", band)
                .set("fill", to_string(&palette.green))
                .set("opacity", 0.9),
        )
        .add(
            Rectangle::new()
                .set("x", 220)
                .set("y", 300)
                .set("width", 584)
                .set("height", 40)
                .set("fill", to_string(&palette.green))
                .set("opacity", 0.6),
        )
}

// Sharp-angled "M", after the NERV lettering.
fn make_letter_mark(palette: &Palette) -> Group {
    let data = Data::new()
        .move_to((360, 480))
        .line_to((420, 480))
        .line_to((512, 680))
        .line_to((604, 480))
        .line_to((664, 480))
        .line_to((634, 780))
        .line_to((574, 780))
        .line_to((512, 640))
        .line_to((450, 780))
        .line_to((390, 780))
        .close();

    Group::new().add(
        Path::new()
            .set("d", data)
            .set("fill", to_string(&palette.orange))
            .set("stroke", to_string(&palette.black))
            .set("stroke-width", 3),
    )
}

fn make_bar(
    (x, y): (u32, u32),
    (width, height): (u32, u32),
    color: String,
    opacity: f64,
) -> Rectangle {
    Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", color)
        .set("opacity", opacity)
}

fn make_indicator(r: u32, color: String, opacity: f64) -> Circle {
    Circle::new()
        .set("cx", 512)
        .set("cy", 880)
        .set("r", r)
        .set("fill", color)
        .set("opacity", opacity)
}

/// Builds the full icon. Every color comes from `palette`; the geometry is fixed.
pub fn make_document(palette: &Palette) -> Document {
    let green = to_string(&palette.green);

    let defs = Definitions::new()
        .add(make_hex_pattern(palette))
        .add(make_glow_filter())
        .add(make_armor_gradient(palette));

    let status_bar =
        make_bar((462, 140), (100, 16), to_string(&palette.orange), 0.8).set("rx", 8);

    // (x, y, width, height) for the corner brackets, top-left then top-right.
    let brackets = [
        (140, 240, 6, 60),
        (140, 240, 60, 6),
        (878, 240, 6, 60),
        (824, 240, 60, 6),
    ];

    let document = Document::new()
        .set("width", SIZE)
        .set("height", SIZE)
        .set("viewBox", (0, 0, SIZE, SIZE))
        .add(defs)
        .add(make_background(to_string(&palette.black)))
        .add(make_background(url(HEX_PATTERN_ID)))
        .add(make_armor(palette))
        .add(make_center_line(palette))
        .add(make_visor(palette))
        .add(make_letter_mark(palette))
        .add(status_bar)
        .add(make_indicator(24, green.clone(), 0.8))
        .add(make_indicator(16, to_string(&palette.black), 0.4));

    brackets
        .into_iter()
        .fold(document, |doc, (x, y, w, h)| {
            doc.add(make_bar((x, y), (w, h), green.clone(), 0.6))
        })
}
