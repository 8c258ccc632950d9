use analytics::AnalyticsEngine;
use configuration::{AnalysisSettings, ReportFormat, ReportSettings, ShrinkLag};
use reporter::Reporter;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// The number printed after `label` on its own line.
fn printed_value(text: &str, label: &str) -> f64 {
    text.lines()
        .find_map(|line| line.strip_prefix(label))
        .unwrap()
        .parse()
        .unwrap()
}

const CSV: &str = "\
Date,SKU_ID,Store,Units_Sold,Footfall,Inventory,Price
2024-03-01,SKU-A,North,1,1,20,2.0
2024-03-01,SKU-B,North,2,2,0,3.5
2024-03-02,SKU-A,South,3,3,14,2.0
2024-03-02,SKU-B,South,4,4,9,3.5
";

fn run(format: ReportFormat) -> String {
    let records = loader::read_transactions(CSV.as_bytes()).unwrap();
    let engine = AnalyticsEngine::new(AnalysisSettings {
        top_n: 10,
        shrink_lag: ShrinkLag::TableOrder,
    });
    let rows = engine.derive(records).unwrap();
    let report = engine.calculate(&rows).unwrap();

    let mut reporter = Reporter::new(
        ReportSettings {
            format,
            ..ReportSettings::default()
        },
        Vec::new(),
    );
    reporter.render(&report, &rows).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn text_report_has_fit_charts_and_recommendations_in_order() {
    let text = run(ReportFormat::Text);

    // Units sold = Footfall on every row.
    assert!(close(printed_value(&text, "Footfall elasticity: "), 1.0));
    assert!(close(printed_value(&text, "Intercept: "), 0.0));

    let fit = text.find("Footfall elasticity").unwrap();
    let scatter = text.find("Footfall vs Sales Regression").unwrap();
    let heatmap = text.find("SKU Inventory Heatmap").unwrap();
    let recs = text.find("🔍 Recommendations:").unwrap();
    assert!(fit < scatter && scatter < heatmap && heatmap < recs);

    assert!(text.contains("Inventory Level"));
    assert!(text.contains("Shrink by store"));
    assert!(text.ends_with("- Investigate stores with persistent shrink values.\n"));
}

#[test]
fn json_report_carries_every_table() {
    let json = run(ReportFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["rows"], 4);
    assert_eq!(value["sku_performance"].as_array().unwrap().len(), 2);
    assert_eq!(value["top_skus"][0]["sku_id"], "SKU-B");
    assert_eq!(value["oos_rates"][0]["sku_id"], "SKU-B");
    assert_eq!(value["oos_rates"][0]["oos_rate"], 0.5);

    // Table-order shrink: North gets 0 (first row missing) + (20 - 2 - 0) = 18,
    // South gets (0 - 3 - 14) + (14 - 4 - 9) = -17 + 1 = -16.
    assert_eq!(value["shrink_summary"][0]["store"], "North");
    assert_eq!(value["shrink_summary"][0]["shrink"], 18.0);
    assert_eq!(value["shrink_summary"][1]["shrink"], -16.0);

    assert!(close(value["footfall_fit"]["slope"].as_f64().unwrap(), 1.0));
    assert!(!json.contains("Recommendations"));
}
