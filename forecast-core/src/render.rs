//! Static HTML rendering of forecast rows.

use crate::model::ForecastRow;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Weather Forecast</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            background-color: #f0f0f0;
            margin: 0;
        }
        table {
            border-collapse: collapse;
            width: 80%;
            margin: 20px;
            background-color: #ffffff;
        }
        th, td {
            padding: 12px;
            text-align: center;
            border-bottom: 1px solid #ddd;
        }
        th {
            background-color: #4CAF50;
            color: white;
        }
        tr:hover {
            background-color: #f5f5f5;
        }
    </style>
</head>
<body>
    <table>
        <tr>
            <th>Date</th>
            <th>Time</th>
            <th>Temperature (F)</th>
            <th>Forecast</th>
        </tr>
"#;

const DOCUMENT_TAIL: &str = r#"    </table>
</body>
</html>
"#;

/// Render rows into a complete HTML document.
///
/// The output depends only on `rows`; nothing time-varying is embedded.
pub fn render(rows: &[ForecastRow]) -> String {
    let mut html = String::from(DOCUMENT_HEAD);

    for row in rows {
        html.push_str("        <tr>\n");
        for cell in [
            row.date.to_string(),
            row.time.to_string(),
            row.temperature.to_string(),
            row.description.clone(),
        ] {
            html.push_str(&format!("            <td>{}</td>\n", escape_html(&cell)));
        }
        html.push_str("        </tr>\n");
    }

    html.push_str(DOCUMENT_TAIL);
    html
}

/// Escape text for use inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::Number;

    fn row(day: u32, hour: u32, temperature: i64, description: &str) -> ForecastRow {
        ForecastRow {
            date: NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date"),
            time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"),
            temperature: Number::from(temperature),
            description: description.to_string(),
        }
    }

    fn cells(html: &str) -> Vec<&str> {
        html.lines()
            .filter_map(|line| line.trim().strip_prefix("<td>")?.strip_suffix("</td>"))
            .collect()
    }

    #[test]
    fn empty_input_renders_header_only() {
        let html = render(&[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<th>").count(), 4);
        assert!(html.contains("<th>Temperature (F)</th>"));
        assert!(cells(&html).is_empty());
    }

    #[test]
    fn one_table_row_per_forecast_row_in_order() {
        let rows = [row(15, 6, 40, "Patchy Fog"), row(15, 18, 28, "Snow Showers")];

        let html = render(&rows);

        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(
            cells(&html),
            [
                "2024-03-15",
                "06:00:00",
                "40",
                "Patchy Fog",
                "2024-03-15",
                "18:00:00",
                "28",
                "Snow Showers",
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let rows = [row(16, 6, 51, "Sunny")];
        assert_eq!(render(&rows), render(&rows));
    }

    #[test]
    fn escapes_markup_in_descriptions() {
        let html = render(&[row(15, 6, 40, "<script>alert('x')</script> & \"more\"")]);

        assert!(!html.contains("<script>"));
        assert!(html.contains(
            "<td>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;more&quot;</td>"
        ));
    }
}
