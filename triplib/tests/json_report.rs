use triplib::{formats::json::JsonReport, scenario, traits::WriteReport};

#[test]
fn demo_json_summary() {
    let trip = scenario::demo().expect("demo");
    let mut out = Vec::new();
    JsonReport::write(&mut out, &trip).expect("write json");

    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(v["trip_id"], "001");
    assert_eq!(v["start_date"], "2021-01-01");
    assert_eq!(v["staff"][1], "Bob (002)");
    assert_eq!(v["counts"]["meal"], 3);
    assert_eq!(v["by_mode"][0]["mode"], "rail");
    assert_eq!(v["by_mode"][1]["mode"], "taxi");
    assert_eq!(v["by_mode"][1]["cost"], "20.0");
    assert_eq!(v["totals"]["transportation"], "70.0");
    assert_eq!(v["totals"]["other_spending"], "150.0");
    assert_eq!(v["totals"]["total"], "220.0");
}
