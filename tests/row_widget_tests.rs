//! Headless-Tests des egui-Widgets (ohne Fenster, nur `egui::Context::run`).

use options_row::{
    OptionItem, OptionsError, OptionsRow, OptionsRowOptions, OptionsRowResponse, Padding,
};

fn items() -> Vec<OptionItem> {
    ["Aus", "Niedrig", "Mittel", "Hoch", "Max"]
        .into_iter()
        .map(OptionItem::new)
        .collect()
}

fn raw_input(width: f32, time: f64) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(width, 200.0),
        )),
        time: Some(time),
        ..Default::default()
    }
}

/// Führt einen Frame aus und liefert die Antwort der Zeile.
fn run_frame(ctx: &egui::Context, row: &mut OptionsRow, width: f32, time: f64) -> Vec<usize> {
    let mut changed = Vec::new();
    let _ = ctx.run(raw_input(width, time), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response: OptionsRowResponse = row.show(ui);
            changed = response.changed_indices;
        });
    });
    changed
}

#[test]
fn test_first_frame_builds_controller_at_selection() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 2, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");
    assert!(row.controller().is_none());

    let changed = run_frame(&ctx, &mut row, 400.0, 0.0);
    assert_eq!(changed, vec![2]);

    let controller = row.controller().expect("Controller nach erstem Frame");
    assert_eq!(controller.selected_index(), 2);
    assert_eq!(
        controller.offset_x(),
        controller.dimensions().calculate_offset(2)
    );
    assert_eq!(controller.thumb_label(), "Mittel");
}

#[test]
fn test_stable_geometry_keeps_quiet() {
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 1, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");

    run_frame(&ctx, &mut row, 400.0, 0.0);
    let changed = run_frame(&ctx, &mut row, 400.0, 0.1);
    assert!(changed.is_empty());
    assert_eq!(row.selected_index(), 1);
}

#[test]
fn test_resize_reinitializes_controller() {
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 3, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");

    run_frame(&ctx, &mut row, 400.0, 0.0);
    let wide_section = row
        .controller()
        .map(|c| c.dimensions().section_width)
        .expect("Controller vorhanden");

    let changed = run_frame(&ctx, &mut row, 600.0, 0.1);
    assert_eq!(changed, vec![3]);

    let controller = row.controller().expect("Controller vorhanden");
    assert!(controller.dimensions().section_width > wide_section);
    assert_eq!(
        controller.offset_x(),
        controller.dimensions().calculate_offset(3)
    );
}

#[test]
fn test_programmatic_select_settles_over_frames() {
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 0, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");
    run_frame(&ctx, &mut row, 400.0, 0.0);

    row.select(4, true).expect("Index 4 ist gültig");
    assert_eq!(row.selected_index(), 4);

    let changed = run_frame(&ctx, &mut row, 400.0, 1.0);
    assert_eq!(changed, vec![4]);

    let mut time = 1.0;
    for _ in 0..60 {
        time += 1.0 / 60.0;
        run_frame(&ctx, &mut row, 400.0, time);
    }
    let controller = row.controller().expect("Controller vorhanden");
    assert!(!controller.is_settling());
    assert_eq!(
        controller.offset_x(),
        controller.dimensions().calculate_offset(4)
    );
}

#[test]
fn test_select_out_of_range_is_rejected() {
    let mut row = OptionsRow::new(items(), 0, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");
    assert_eq!(
        row.select(5, false),
        Err(OptionsError::OutOfRange { index: 5, count: 5 })
    );
    assert_eq!(row.selected_index(), 0);
}

#[test]
fn test_invalid_rows_are_rejected_up_front() {
    assert!(OptionsRow::new(Vec::new(), 0, OptionsRowOptions::default()).is_err());
    assert!(matches!(
        OptionsRow::new(items(), 7, OptionsRowOptions::default()),
        Err(OptionsError::OutOfRange { index: 7, .. })
    ));
}

#[test]
fn test_padding_wider_than_row_paints_empty_container() {
    let ctx = egui::Context::default();
    let options = OptionsRowOptions {
        content_padding: Padding::all(500.0),
        ..OptionsRowOptions::default()
    };
    let mut row = OptionsRow::new(items(), 0, options).expect("Zeile sollte entstehen");

    let changed = run_frame(&ctx, &mut row, 400.0, 0.0);
    assert!(changed.is_empty());
    assert!(row.controller().is_none());

    row.set_options(OptionsRowOptions::default());
    run_frame(&ctx, &mut row, 400.0, 0.1);
    assert!(row.controller().is_some());
}

#[test]
fn test_set_items_rebuilds_with_new_labels() {
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 0, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");
    run_frame(&ctx, &mut row, 400.0, 0.0);

    let fewer = vec![
        OptionItem::new("Links"),
        OptionItem::new("Rechts").with_track_text("R"),
    ];
    row.set_items(fewer, 1).expect("gültige Liste");
    let changed = run_frame(&ctx, &mut row, 400.0, 0.1);

    assert_eq!(changed, vec![1]);
    let controller = row.controller().expect("Controller vorhanden");
    assert_eq!(controller.dimensions().option_count, 2);
    assert_eq!(controller.thumb_label(), "Rechts");
}

#[test]
fn test_cosmetic_options_keep_running_transition() {
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 0, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");
    run_frame(&ctx, &mut row, 400.0, 0.0);

    row.select(4, true).expect("Index 4 ist gültig");
    run_frame(&ctx, &mut row, 400.0, 1.0);
    run_frame(&ctx, &mut row, 400.0, 1.05);
    let mid = row.controller().map(|c| c.offset_x()).expect("Controller vorhanden");
    assert!(row.controller().is_some_and(|c| c.is_settling()));

    let options = OptionsRowOptions {
        inactive_track_visible: true,
        active_track_visible: false,
        active_track_min_width: 80.0,
        thumb_resize_secs: 0.4,
        ..OptionsRowOptions::default()
    };
    row.set_options(options.clone());
    let changed = run_frame(&ctx, &mut row, 400.0, 1.05);

    assert!(changed.is_empty());
    assert_eq!(row.options(), &options);
    let controller = row.controller().expect("Controller vorhanden");
    assert_eq!(controller.offset_x(), mid);
    assert!(controller.is_settling());
    assert_eq!(controller.selected_index(), 4);
}

#[test]
fn test_transition_options_apply_without_rebuild() {
    let ctx = egui::Context::default();
    let mut row = OptionsRow::new(items(), 1, OptionsRowOptions::default())
        .expect("Zeile sollte entstehen");
    run_frame(&ctx, &mut row, 400.0, 0.0);

    row.set_options(OptionsRowOptions {
        transition_duration_secs: 0.0,
        ..OptionsRowOptions::default()
    });
    let changed = run_frame(&ctx, &mut row, 400.0, 0.1);
    assert!(changed.is_empty());

    row.select(3, true).expect("Index 3 ist gültig");
    run_frame(&ctx, &mut row, 400.0, 0.2);
    let controller = row.controller().expect("Controller vorhanden");
    assert!(!controller.is_settling());
    assert_eq!(
        controller.offset_x(),
        controller.dimensions().calculate_offset(3)
    );
}
