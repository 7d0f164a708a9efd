//! SVG element builders shared by the figure renderers. Coordinates are
//! formatted to two decimals so rendered documents are byte-stable.

pub fn document(width: f64, height: f64, body: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w:.0}' height='{h:.0}'>{body}</svg>",
        w = width,
        h = height
    )
}

pub fn filled_rect(x: f64, y: f64, width: f64, height: f64, fill: &str) -> String {
    format!(
        "<rect x='{x:.2}' y='{y:.2}' width='{width:.2}' height='{height:.2}' fill='{fill}' />"
    )
}

pub fn frame_rect(x: f64, y: f64, width: f64, height: f64, stroke: &str) -> String {
    format!(
        "<rect x='{x:.2}' y='{y:.2}' width='{width:.2}' height='{height:.2}' fill='none' stroke='{stroke}' stroke-width='1' />"
    )
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) -> String {
    format!(
        "<line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{stroke}' stroke-width='{width:.1}' />"
    )
}

pub fn dashed_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) -> String {
    format!(
        "<line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{stroke}' stroke-width='{width:.1}' stroke-dasharray='6 4' />"
    )
}

pub fn polyline(points: &[(f64, f64)], stroke: &str, width: f64) -> String {
    let mut coords = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        if idx > 0 {
            coords.push(' ');
        }
        coords.push_str(&format!("{x:.2},{y:.2}"));
    }
    format!(
        "<polyline points='{coords}' fill='none' stroke='{stroke}' stroke-width='{width:.1}' />"
    )
}

pub fn circle(cx: f64, cy: f64, r: f64, fill: &str) -> String {
    format!("<circle cx='{cx:.2}' cy='{cy:.2}' r='{r:.1}' fill='{fill}' />")
}
