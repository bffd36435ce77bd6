use crate::charts::svg::{Anchor, SvgDoc};
use crate::charts::{HEIGHT, WIDTH};
use crate::model::aggregate::CorrelationMatrix;
use crate::report::format_f64_2;

const NAN_FILL: &str = "#d9d9d9";

pub fn render_heatmap(matrix: &CorrelationMatrix, title: &str) -> String {
    let mut doc = SvgDoc::new(WIDTH, HEIGHT);
    doc.title(title);

    let n = matrix.size();
    if n == 0 {
        doc.text(WIDTH / 2.0, HEIGHT / 2.0, 13.0, Anchor::Middle, "no scores");
        return doc.finish();
    }

    let left = 160.0;
    let top = 60.0;
    let side = ((HEIGHT - top - 70.0) / n as f64).min((WIDTH - left - 140.0) / n as f64);

    for i in 0..n {
        let y = top + i as f64 * side;
        doc.text(left - 10.0, y + side / 2.0 + 4.0, 12.0, Anchor::End, &matrix.labels[i]);
        for j in 0..n {
            let x = left + j as f64 * side;
            let v = matrix.get(i, j);
            let fill = if v.is_nan() {
                NAN_FILL.to_string()
            } else {
                diverging_color(v)
            };
            doc.outlined_rect(x, y, side, side, &fill, "white");
            doc.text(
                x + side / 2.0,
                y + side / 2.0 + 5.0,
                14.0,
                Anchor::Middle,
                &format_f64_2(v),
            );
        }
    }
    for j in 0..n {
        let x = left + j as f64 * side + side / 2.0;
        doc.text(x, top + n as f64 * side + 20.0, 12.0, Anchor::Middle, &matrix.labels[j]);
    }

    draw_color_bar(&mut doc, left + n as f64 * side + 40.0, top, n as f64 * side);
    doc.finish()
}

fn draw_color_bar(doc: &mut SvgDoc, x: f64, top: f64, height: f64) {
    let steps = 20;
    let h = height / steps as f64;
    for k in 0..steps {
        let v = 1.0 - 2.0 * (k as f64 + 0.5) / steps as f64;
        doc.rect(x, top + k as f64 * h, 16.0, h + 0.5, &diverging_color(v));
    }
    doc.text(x + 22.0, top + 10.0, 11.0, Anchor::Start, "1");
    doc.text(x + 22.0, top + height / 2.0 + 4.0, 11.0, Anchor::Start, "0");
    doc.text(x + 22.0, top + height, 11.0, Anchor::Start, "-1");
}

/// Blue at -1, white at 0, red at +1.
pub fn diverging_color(v: f64) -> String {
    let t = v.clamp(-1.0, 1.0);
    let (r, g, b) = if t >= 0.0 {
        lerp_rgb((255, 255, 255), (178, 24, 43), t)
    } else {
        lerp_rgb((255, 255, 255), (33, 102, 172), -t)
    };
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
