#![no_main]

use libfuzzer_sys::fuzz_target;
use options_row::{Dimensions, LayoutInput, OptionsController, OptionsIntent, Padding};

// Byte-Kodierung: [Optionszahl, Padding, dann je 3 Bytes pro Intent]
fuzz_target!(|data: &[u8]| {
    let [count, padding, rest @ ..] = data else {
        return;
    };
    let option_count = (*count as usize % 16) + 1;
    let padding = Padding::all(f32::from(*padding % 40));
    let input = LayoutInput::new(320.0, 48.0, padding, option_count);
    let Ok(dimensions) = Dimensions::compute(&input) else {
        return;
    };

    let labels = (0..option_count).map(|i| i.to_string()).collect();
    let Ok(mut controller) = OptionsController::new(dimensions, labels, move |index| {
        assert!(index < option_count, "Callback mit ungültigem Index {index}");
    }) else {
        return;
    };

    let mut now = 0.0;
    for chunk in rest.chunks_exact(3) {
        let value = i16::from_le_bytes([chunk[1], chunk[2]]);
        let intent = match chunk[0] % 5 {
            0 => OptionsIntent::SlotTapped {
                index: value.unsigned_abs() as usize % (option_count + 1),
            },
            1 => OptionsIntent::DragStarted,
            2 => OptionsIntent::DragMoved {
                delta: f32::from(value) / 8.0,
            },
            3 => OptionsIntent::DragEnded,
            _ => {
                now += f64::from(value.unsigned_abs()) / 1000.0;
                OptionsIntent::FrameTick { now }
            }
        };
        let _ = controller.handle_intent(intent);

        assert!(controller.selected_index() < option_count);
        assert_eq!(
            controller.thumb_label(),
            controller.thumb_labels()[controller.selected_index()]
        );
        let upper = dimensions.calculate_offset(dimensions.last_index()) + 1e-3;
        assert!((0.0..=upper).contains(&controller.offset_x()));
    }
});
