use approx::assert_relative_eq;
use framesim_scenes::{
    Scene, TimeBase, Vec2,
    wave::{
        DEFAULT_FPS, DEFAULT_SPEED_SCALE, SourceLayout, WaveConfig, WaveField, WaveParams,
        WaveSource,
    },
};

fn time_base() -> TimeBase {
    TimeBase::new(DEFAULT_FPS, DEFAULT_SPEED_SCALE).unwrap()
}

fn field(sources: Vec<WaveSource>) -> WaveField {
    WaveField::new(WaveConfig::with_sources(WaveParams::default(), sources, time_base()).unwrap())
}

fn sources() -> Vec<WaveSource> {
    vec![
        WaveSource::new(Vec2::new(300.0, 300.0), 40.0, 30.0).unwrap(),
        WaveSource::new(Vec2::new(500.0, 280.0), 55.0, 12.0).unwrap(),
        WaveSource::new(Vec2::new(410.0, 120.0), 25.0, -8.0).unwrap(),
    ]
}

#[test]
fn field_is_the_sum_of_single_source_fields() {
    let combined = field(sources());
    let singles: Vec<_> = sources().into_iter().map(|s| field(vec![s])).collect();

    for frame in [0_i64, 1, 17, 240] {
        for (x, y) in [(0.0, 0.0), (300.0, 300.0), (412.5, 219.25), (799.0, 599.0)] {
            let total = combined.amplitude_at(frame, x, y).unwrap();
            let sum: f64 = singles
                .iter()
                .map(|f| f.amplitude_at(frame, x, y).unwrap())
                .sum();
            assert_relative_eq!(total, sum, epsilon = 1e-12);
        }
    }
}

#[test]
fn zero_sources_give_zero_everywhere() {
    let empty = WaveField::new(
        WaveConfig::new(WaveParams::default(), &SourceLayout::standard(0), time_base()).unwrap(),
    );

    for frame in [0_i64, 9, 1000] {
        assert_eq!(empty.amplitude_at(frame, 123.0, 456.0).unwrap(), 0.0);
    }
}

#[test]
fn symmetric_pair_is_symmetric() {
    let field = WaveField::new(WaveConfig::default());

    for frame in [0_i64, 5, 33] {
        let left = field.amplitude_at(frame, 400.0 - 57.0, 210.0).unwrap();
        let right = field.amplitude_at(frame, 400.0 + 57.0, 210.0).unwrap();
        assert_relative_eq!(left, right, epsilon = 1e-9);
    }
}

#[test]
fn amplitude_is_bounded_by_source_amplitudes() {
    let field = field(sources());
    let bound: f64 = sources().iter().map(|s| s.amplitude().abs()).sum();

    let snapshot = field.snapshot(77).unwrap();

    assert!(snapshot.grid.values().iter().all(|v| v.abs() <= bound));
}
