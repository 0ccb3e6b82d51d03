//! Benchmarks for the transition function and controller dispatch.

#![allow(missing_docs)] // criterion macros generate undocumented items

use composer_bar::controller::{Controller, RecordingHost};
use composer_bar::model::{ComposerAction, ComposerInput, Height, KeyboardSignal, Mode, PanelMetrics};
use composer_bar::parser::parse_script;
use composer_bar::state::apply_input;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn inputs() -> Vec<ComposerInput> {
    let h = Height::new(291.0).unwrap_or(Height::ZERO);
    let inset = Height::new(34.0).unwrap_or(Height::ZERO);
    vec![
        KeyboardSignal::WillShow(h).into(),
        ComposerAction::ToggleEmoji.into(),
        ComposerAction::TogglePlus.into(),
        KeyboardSignal::WillHide(inset).into(),
        ComposerAction::RequestKeyboard.into(),
        ComposerAction::ToggleVoice.into(),
        ComposerInput::Dismiss,
    ]
}

fn bench_transition(c: &mut Criterion) {
    let sequence = inputs();
    let inset = PanelMetrics::default().safe_area_inset;

    c.bench_function("apply_input_cycle", |b| {
        b.iter(|| {
            let mut mode = Mode::initial(inset);
            for input in &sequence {
                mode = apply_input(black_box(mode), black_box(*input), inset);
            }
            mode
        })
    });
}

fn bench_controller(c: &mut Criterion) {
    let sequence = inputs();

    c.bench_function("controller_dispatch_cycle", |b| {
        let mut controller = Controller::new(RecordingHost::new(), PanelMetrics::default());
        b.iter(|| {
            for input in &sequence {
                let _ = controller.apply(black_box(*input));
            }
            controller.host_mut().drain();
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let script: String = (0..1000)
        .map(|i| match i % 4 {
            0 => "{\"event\":\"toggle_emoji\"}\n".to_string(),
            1 => format!("{{\"event\":\"keyboard_will_show\",\"height\":{}}}\n", 200 + i % 100),
            2 => "{\"event\":\"dismiss\"}\n".to_string(),
            _ => "# comment\n".to_string(),
        })
        .collect();

    c.bench_function("parse_script_1000_lines", |b| {
        b.iter(|| parse_script(black_box(&script)))
    });
}

criterion_group!(benches, bench_transition, bench_controller, bench_parse);
criterion_main!(benches);
