// File: crates/scatter-core/src/state.rs
// Summary: Data set ownership and the "randomize" action.
// Notes:
// - `LocalState` is state owned by the chart itself; `Store` is an external
//   container driven by dispatched actions. `StateController` accepts either
//   through `StateHolder`.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::chart::{compose_with, ChartVisual, RenderOptions};
use crate::data::DataSet;
use crate::error::{ChartError, Result};
use crate::generator::DataGenerator;
use crate::types::ChartConfig;

/// Owner of the current data set.
pub trait StateHolder {
    fn data(&self) -> &DataSet;
    /// Replace the data set with a freshly generated one.
    fn randomize(&mut self) -> Result<()>;
}

/// Chart-owned state. The initial set is generated on construction.
#[derive(Debug)]
pub struct LocalState<R = StdRng> {
    data: DataSet,
    generator: DataGenerator<R>,
    count: usize,
    max_value: f64,
}

impl LocalState<StdRng> {
    pub fn new(config: &ChartConfig) -> Result<Self> {
        Self::with_generator(config, DataGenerator::from_entropy())
    }
}

impl<R: Rng> LocalState<R> {
    pub fn with_generator(config: &ChartConfig, mut generator: DataGenerator<R>) -> Result<Self> {
        let data = generator.generate(config.num_data_points, config.max_value)?;
        Ok(Self { data, generator, count: config.num_data_points, max_value: config.max_value })
    }
}

impl<R: Rng> StateHolder for LocalState<R> {
    fn data(&self) -> &DataSet {
        &self.data
    }

    fn randomize(&mut self) -> Result<()> {
        self.data = self.generator.generate(self.count, self.max_value)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Randomize,
}

/// Pure transition: the next data set for `action`.
pub fn reduce<R: Rng>(
    _state: &DataSet,
    action: Action,
    generator: &mut DataGenerator<R>,
    config: &ChartConfig,
) -> Result<DataSet> {
    match action {
        Action::Randomize => generator.generate(config.num_data_points, config.max_value),
    }
}

type Listener = Box<dyn FnMut(&DataSet)>;

/// Centralized state container: holds the data set, applies dispatched
/// actions through [`reduce`], and notifies subscribers after each change.
pub struct Store<R = StdRng> {
    state: DataSet,
    generator: DataGenerator<R>,
    config: ChartConfig,
    listeners: Vec<Listener>,
}

impl Store<StdRng> {
    pub fn new(config: &ChartConfig) -> Result<Self> {
        Self::with_generator(config, DataGenerator::from_entropy())
    }
}

impl<R: Rng> Store<R> {
    /// The initial state is the result of one `Randomize`.
    pub fn with_generator(config: &ChartConfig, mut generator: DataGenerator<R>) -> Result<Self> {
        let state = reduce(&DataSet::empty(), Action::Randomize, &mut generator, config)?;
        Ok(Self { state, generator, config: *config, listeners: Vec::new() })
    }

    pub fn state(&self) -> &DataSet {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let next = reduce(&self.state, action, &mut self.generator, &self.config)?;
        self.state = next;
        debug!(?action, listeners = self.listeners.len(), "store dispatched");
        for l in &mut self.listeners {
            l(&self.state);
        }
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DataSet) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl<R: Rng> StateHolder for Store<R> {
    fn data(&self) -> &DataSet {
        self.state()
    }

    fn randomize(&mut self) -> Result<()> {
        self.dispatch(Action::Randomize)
    }
}

type View = Box<dyn FnMut(&ChartVisual)>;

/// Keeps the composed chart in step with the data set.
///
/// Every successful `randomize()` recomposes the chart and notifies the
/// subscribed views before returning.
pub struct StateController<H: StateHolder = LocalState> {
    holder: H,
    config: ChartConfig,
    options: RenderOptions,
    visual: ChartVisual,
    views: Vec<View>,
}

impl StateController<LocalState> {
    /// Validate `config` and own a freshly generated data set.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let holder = LocalState::new(&config)?;
        Self::with_holder(config, RenderOptions::default(), holder)
    }
}

impl<H: StateHolder> StateController<H> {
    /// Drive the chart from an externally supplied holder.
    ///
    /// The holder generates the data, so it must have been built for the
    /// same point count as `config`.
    pub fn with_holder(config: ChartConfig, options: RenderOptions, holder: H) -> Result<Self> {
        config.validate()?;
        let held = holder.data().len();
        if held != config.num_data_points {
            return Err(ChartError::invalid(
                "num_data_points",
                format!("is {} but the injected holder produces {held} points", config.num_data_points),
            ));
        }
        let visual = compose_with(holder.data(), &config, &options);
        Ok(Self { holder, config, options, visual, views: Vec::new() })
    }

    pub fn data(&self) -> &DataSet {
        self.holder.data()
    }

    pub fn visual(&self) -> &ChartVisual {
        &self.visual
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn holder(&self) -> &H {
        &self.holder
    }

    pub fn randomize(&mut self) -> Result<()> {
        self.holder.randomize()?;
        self.visual = compose_with(self.holder.data(), &self.config, &self.options);
        info!(points = self.holder.data().len(), "data randomized");
        for v in &mut self.views {
            v(&self.visual);
        }
        Ok(())
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
        self.visual = compose_with(self.holder.data(), &self.config, &self.options);
        for v in &mut self.views {
            v(&self.visual);
        }
    }

    /// Register a view; it is called once now and after every change.
    pub fn subscribe(&mut self, mut view: impl FnMut(&ChartVisual) + 'static) {
        view(&self.visual);
        self.views.push(Box::new(view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cfg() -> ChartConfig {
        ChartConfig::default().with_data_shape(20, 100.0)
    }

    #[test]
    fn local_state_generates_on_construction() {
        let s = LocalState::with_generator(&cfg(), DataGenerator::seeded(1)).unwrap();
        assert_eq!(s.data().len(), 20);
    }

    #[test]
    fn randomize_replaces_the_set_wholesale() {
        let mut s = LocalState::with_generator(&cfg(), DataGenerator::seeded(1)).unwrap();
        let before = s.data().clone();
        s.randomize().unwrap();
        assert!(!before.ptr_eq(s.data()));
        assert_ne!(&before, s.data());
        assert_eq!(before.len(), 20);
    }

    #[test]
    fn store_notifies_subscribers() {
        let mut store = Store::with_generator(&cfg(), DataGenerator::seeded(2)).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |d| sink.borrow_mut().push(d.len()));
        store.dispatch(Action::Randomize).unwrap();
        store.dispatch(Action::Randomize).unwrap();
        assert_eq!(*seen.borrow(), [20, 20]);
    }

    #[test]
    fn controller_recomposes_and_notifies_views() {
        let store = Store::with_generator(&cfg(), DataGenerator::seeded(3)).unwrap();
        let mut ctl = StateController::with_holder(cfg(), RenderOptions::default(), store).unwrap();
        let calls = Rc::new(RefCell::new(0usize));
        let c = Rc::clone(&calls);
        ctl.subscribe(move |v| {
            assert_eq!(v.points.len(), 20);
            *c.borrow_mut() += 1;
        });
        let first = ctl.visual().clone();
        ctl.randomize().unwrap();
        assert_eq!(*calls.borrow(), 2);
        assert_ne!(&first, ctl.visual());
        assert_eq!(ctl.visual(), &compose_with(ctl.data(), &cfg(), &RenderOptions::default()));
    }

    #[test]
    fn controller_rejects_holder_with_other_point_count() {
        let store = Store::with_generator(&ChartConfig::default(), DataGenerator::seeded(4)).unwrap();
        let err = StateController::with_holder(cfg(), RenderOptions::default(), store).err().unwrap();
        assert!(matches!(err, ChartError::InvalidConfig { field: "num_data_points", .. }));
    }

    #[test]
    fn controller_accepts_subnormal_max_value() {
        let tiny = ChartConfig::default().with_data_shape(10, 1e-310);
        let local = LocalState::with_generator(&tiny, DataGenerator::seeded(5).continuous()).unwrap();
        let mut ctl = StateController::with_holder(tiny, RenderOptions::default(), local).unwrap();
        ctl.randomize().unwrap();
        assert_eq!(ctl.visual().points.len(), 10);
        assert_eq!(ctl.visual().x_axis().ticks.len(), 1);
    }

    #[test]
    fn controller_rejects_invalid_config() {
        let bad = ChartConfig::new(500.0, -300.0, 30.0);
        assert!(StateController::new(bad).is_err());
    }
}
