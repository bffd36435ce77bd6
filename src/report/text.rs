use crate::report::{GroupingSummary, SummaryData, format_f64_2, format_f64_4};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str(&data.title);
    out.push('\n');
    out.push_str(&"=".repeat(data.title.chars().count()));
    out.push_str("\n\n");

    out.push_str("1. Dataset\n");
    out.push_str(&format!("Source: {} ({})\n", data.input.source, data.input.kind));
    out.push_str(&format!("Format: {}\n", data.input.format));
    out.push_str(&format!(
        "Respondents: {}\nColumns: {}\n\n",
        data.input.n_rows, data.input.n_columns
    ));

    out.push_str("2. Composite scores\n");
    for s in &data.scores {
        out.push_str(&format!(
            "{}: n={} missing={} mean={} sd={} min={} q1={} median={} q3={} max={}\n",
            s.name,
            s.count,
            s.missing,
            format_f64_4(s.mean),
            format_f64_4(s.std),
            format_f64_2(s.min),
            format_f64_2(s.q1),
            format_f64_2(s.median),
            format_f64_2(s.q3),
            format_f64_2(s.max)
        ));
    }
    out.push('\n');

    out.push_str("3. Group means\n");
    for g in &data.groupings {
        push_grouping(&mut out, g);
    }
    out.push('\n');

    out.push_str("4. Correlation\n");
    let labels = &data.correlation.labels;
    for (i, row) in data.correlation.matrix.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format_f64_4(*v)).collect();
        out.push_str(&format!("{}: {}\n", labels[i], cells.join("\t")));
    }
    out.push('\n');

    out.push_str("5. Charts\n");
    for (i, c) in data.charts.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, c));
    }

    out
}

fn push_grouping(out: &mut String, g: &GroupingSummary) {
    out.push_str(&format!("By {} ({} order):\n", g.column, g.order));
    if g.rows.is_empty() {
        out.push_str("  (no groups)\n");
        return;
    }
    for r in &g.rows {
        out.push_str(&format!(
            "  {} / {}: {} (n={})\n",
            r.group,
            r.score,
            format_f64_4(r.mean),
            r.n
        ));
    }
}
