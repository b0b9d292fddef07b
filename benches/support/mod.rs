//! Shared helpers for benchmarks

use ranklist::config::AppConfig;
use ranklist::model::AppModel;
use ranklist::theme::Theme;

/// Create an AppModel holding `rows` rows of `columns` fields each
#[allow(dead_code)]
pub fn make_model(rows: usize, columns: u8) -> AppModel {
    let config = AppConfig {
        columns: columns as i64,
        ..AppConfig::default()
    };
    let mut model = AppModel::new(1920, 1080, config, Theme::default());
    model.set_font_metrics(20, 10.0);

    for i in 0..rows {
        let position = model.list.next_position();
        let fields = (0..columns)
            .map(|c| Some(format!("item {} field {}", i, c)))
            .collect();
        let row = model.list.build_row(fields, position);
        model.list.append(row);
    }
    model.list.renumber();
    model
}

/// CSV text with `rows` lines of `fields` comma-separated values
#[allow(dead_code)]
pub fn make_csv(rows: usize, fields: usize) -> String {
    (0..rows)
        .map(|i| {
            (0..fields)
                .map(|f| format!("value {}-{}", i, f))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
