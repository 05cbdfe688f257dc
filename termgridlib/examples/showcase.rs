//! Render the same table borderless, framed, and width-budgeted.

use termgridlib::{Border, HorizontalAlignment, MaxWidth, Settings, Table};

fn main() {
    let header: Vec<String> = ["City", "Country", "Population"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let body: Vec<Vec<String>> = [
        ["Lisbon", "Portugal", "545923"],
        ["Porto", "Portugal", "231800"],
        ["Reykjavik", "Iceland", "139875"],
    ]
    .iter()
    .map(|row| row.iter().map(|s| s.to_string()).collect())
    .collect();

    let plain = Table::new(&header, &body, &Settings::default()).expect("valid settings");
    println!("borderless:\n{}\n", plain.get());

    let settings = Settings::default()
        .with_horizontal_alignment(HorizontalAlignment::Right)
        .with_margin(1);
    let framed =
        Table::with_border(&header, &body, &settings, &Border::light()).expect("valid settings");
    println!("framed, right-aligned, margin 1:\n{}\n", framed.get());

    let narrow = Settings::default().with_max_width(MaxWidth::Fixed(16));
    let paged = Table::with_border(&header, &body, &narrow, &Border::ascii())
        .expect("valid settings");
    println!("budgeted to 16 columns, {} pages:", paged.chunks().len());
    for chunk in paged.chunks() {
        println!("{}", chunk);
    }
}
