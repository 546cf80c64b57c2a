// File: crates/scatter-core/tests/randomize.rs
// Purpose: Randomize behaviour through both state holders.

use scatter_core::{ChartConfig, DataGenerator, RenderOptions, StateController, StateHolder, Store};

fn assert_shape(ctl_data: &scatter_core::DataSet, cfg: &ChartConfig) {
    assert_eq!(ctl_data.len(), cfg.num_data_points);
    for p in ctl_data {
        assert!(p.x >= 0.0 && p.x < cfg.max_value);
        assert!(p.y >= 0.0 && p.y < cfg.max_value);
    }
}

#[test]
fn successive_randomizations_differ() {
    let cfg = ChartConfig::default();
    let mut ctl = StateController::new(cfg).expect("controller");
    ctl.randomize().expect("first");
    let first = ctl.data().clone();
    ctl.randomize().expect("second");
    let second = ctl.data().clone();

    assert_shape(&first, &cfg);
    assert_shape(&second, &cfg);
    // 50 points of integer pairs in [0, 1000): a full collision is not a realistic outcome.
    assert_ne!(first, second);
}

#[test]
fn injected_store_behaves_like_local_state() {
    let cfg = ChartConfig::default().with_data_shape(12, 10.0);
    let store = Store::with_generator(&cfg, DataGenerator::seeded(99)).expect("store");
    let mut ctl = StateController::with_holder(cfg, RenderOptions::default(), store).expect("controller");
    assert_shape(ctl.data(), &cfg);
    let before = ctl.visual().clone();
    ctl.randomize().expect("randomize");
    assert_shape(ctl.holder().data(), &cfg);
    assert_eq!(ctl.visual().points.len(), 12);
    assert_ne!(before.points, ctl.visual().points);
}

#[test]
fn zero_points_is_a_valid_chart() {
    let cfg = ChartConfig::default().with_data_shape(0, 1000.0);
    let mut ctl = StateController::new(cfg).expect("controller");
    ctl.randomize().expect("randomize");
    assert!(ctl.data().is_empty());
    assert!(ctl.visual().points.is_empty());
    // Degenerate domains put the single tick at the range start.
    assert_eq!(ctl.visual().x_axis().ticks[0].position, 30.0);
    assert_eq!(ctl.visual().y_axis().ticks[0].position, 270.0);
}
