use crate::charts::Chart;
use crate::charts::svg::escape_xml;
use crate::report::MetricTile;

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;margin:24px;background:#fafafa;color:#222}\
h1{font-size:24px;border-bottom:3px solid #636efa;padding-bottom:8px}\
.tiles{display:flex;gap:16px;flex-wrap:wrap;margin:16px 0 24px}\
.tile{background:#fff;border:1px solid #ddd;border-radius:6px;padding:12px 18px;min-width:150px}\
.tile .label{font-size:13px;color:#666}.tile .value{font-size:26px;font-weight:bold}\
section{background:#fff;border:1px solid #ddd;border-radius:6px;padding:12px;margin-bottom:20px}\
section h2{font-size:17px;margin:4px 0 8px}";

/// Self-contained page: metric tiles followed by every chart inline.
pub fn render_dashboard_html(title: &str, tiles: &[MetricTile], charts: &[Chart]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(&format!("<style>{}</style>\n", STYLE));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));

    out.push_str("<div class=\"tiles\">\n");
    for tile in tiles {
        out.push_str(&format!(
            "<div class=\"tile\" title=\"{}\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>\n",
            escape_xml(&tile.help),
            escape_xml(&tile.label),
            escape_xml(&tile.value)
        ));
    }
    out.push_str("</div>\n");

    for chart in charts {
        out.push_str(&format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n",
            chart.id,
            escape_xml(&chart.title)
        ));
        out.push_str(&chart.svg);
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
