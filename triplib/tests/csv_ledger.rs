use triplib::{formats::csv::CsvLedger, scenario, traits::WriteReport};

#[test]
fn demo_ledger_rows() {
    let trip = scenario::demo().expect("demo");
    let mut out = Vec::new();
    CsvLedger::write(&mut out, &trip).expect("write csv");

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "category,date,description,amount",
            "rail,2021-01-01T08:00:00,CityA -> CityB (T123),50.0",
            "taxi,2021-01-01T13:00:00,CityB -> Hotel (TX001),20.0",
            "accommodation,2021-01-01,HotelA,100.0",
            "meal,2021-01-01,Lunch,15.0",
            "meal,2021-01-01,Dinner,25.0",
            "meal,2021-01-02,Breakfast,10.0",
        ]
    );
}
