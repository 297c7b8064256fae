//! The ant agent: position, load, and the per-tick update.

use antsort_core::Color;
use antsort_grid::KernelView;
use rand::Rng;

use crate::params::AntParams;

/// What happened to an ant's load during one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadAction {
    /// Load unchanged.
    #[default]
    None,
    /// Picked up an object of this color from the focal cell.
    PickedUp(Color),
    /// Dropped an object of this color onto the focal cell.
    Dropped(Color),
}

/// Result of a single [`Ant::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Pickup/dropoff decision.
    pub action: LoadAction,
    /// Whether the ant changed cells.
    pub moved: bool,
    /// Whether the chosen step was refused because another ant stood on
    /// the target cell.
    pub blocked: bool,
}

/// A mobile agent carrying at most one object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    x: usize,
    y: usize,
    load: Option<Color>,
}

impl Ant {
    /// An unloaded ant at `(x, y)`.
    ///
    /// The caller is responsible for setting the grid's ant flag on that
    /// cell ([`Grid::place_ants`](antsort_grid::Grid::place_ants) does).
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y, load: None }
    }

    /// Current global position.
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Carried object, if any.
    pub fn load(&self) -> Option<Color> {
        self.load
    }

    /// Carried color, or [`Color::EMPTY`] when unloaded.
    pub fn load_color(&self) -> Color {
        self.load.unwrap_or(Color::EMPTY)
    }

    /// Whether the ant carries an object.
    pub fn is_loaded(&self) -> bool {
        self.load.is_some()
    }

    /// Give up the carried object without placing it anywhere.
    ///
    /// Used by forced unloads, where the engine decides where the object
    /// lands.
    pub fn take_load(&mut self) -> Option<Color> {
        self.load.take()
    }

    /// Run one tick: decide on the load, then take one random step.
    ///
    /// `view` must be the window centered on this ant's position.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        view: &mut KernelView<'_>,
        params: &AntParams,
        rng: &mut R,
    ) -> UpdateOutcome {
        let (fx, fy) = view.focal();
        debug_assert_eq!(view.to_global(fx, fy), Some(self.position()));
        let action = self.update_load(view, params, rng);
        let (moved, blocked) = self.update_location(view, rng);
        UpdateOutcome {
            action,
            moved,
            blocked,
        }
    }

    fn update_load<R: Rng + ?Sized>(
        &mut self,
        view: &mut KernelView<'_>,
        params: &AntParams,
        rng: &mut R,
    ) -> LoadAction {
        let here = view.focal_color();
        match self.load {
            None if !here.is_empty() => {
                let f = params.perceived_fraction(view, here);
                if rng.random::<f64>() <= params.pickup_probability(f) {
                    view.set_focal_color(Color::EMPTY);
                    self.load = Some(here);
                    return LoadAction::PickedUp(here);
                }
            }
            Some(carried) if here.is_empty() => {
                let f = params.perceived_fraction(view, carried);
                if rng.random::<f64>() <= params.dropoff_probability(f) {
                    view.set_focal_color(carried);
                    self.load = None;
                    return LoadAction::Dropped(carried);
                }
            }
            _ => {}
        }
        LoadAction::None
    }

    /// Step by a uniform offset in `{-1, 0, 1}²`, clamped to the window.
    /// Returns `(moved, blocked)`.
    fn update_location<R: Rng + ?Sized>(
        &mut self,
        view: &mut KernelView<'_>,
        rng: &mut R,
    ) -> (bool, bool) {
        let (fx, fy) = view.focal();
        let (nx, ny) = view.shape();
        let tx = step_within(fx, rng.random_range(-1i8..=1), nx);
        let ty = step_within(fy, rng.random_range(-1i8..=1), ny);
        if (tx, ty) == (fx, fy) {
            return (false, false);
        }
        if !view.move_ant((fx, fy), (tx, ty)) {
            return (false, true);
        }
        // Local displacement carries straight over to global coordinates.
        self.x = self.x + tx - fx;
        self.y = self.y + ty - fy;
        (true, false)
    }
}

/// `local + delta`, clamped to `[0, len)`.
fn step_within(local: usize, delta: i8, len: usize) -> usize {
    match delta {
        d if d < 0 => local.saturating_sub(1),
        0 => local,
        _ => (local + 1).min(len - 1),
    }
}
