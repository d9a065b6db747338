use hearth_core::{Heaters, Observer};
use tracing::{debug, trace};

use super::{Action, Binding, Config, Event, Solution, Status};

/// Core radius search over houses already converted to `i64`.
pub(super) fn search<H, Obs>(
    houses: H,
    heaters: &Heaters,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    H: Iterator<Item = i64>,
    Obs: Observer<Event, Action>,
{
    let mut widest = Widest::empty();

    for (index, house) in houses.enumerate() {
        let nearest = heaters.nearest(house);
        trace!(
            index,
            house,
            heater = nearest.heater,
            distance = nearest.distance,
            "located house"
        );

        widest.update(Binding {
            index,
            house,
            nearest,
        });

        if config.exceeds_limit(nearest.distance) {
            return widest.finish(Status::LimitExceeded, heaters);
        }

        let event = Event::Located {
            index,
            house,
            nearest,
            radius: widest.radius(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return widest.finish(Status::StoppedByObserver, heaters);
        }
    }

    widest.finish(Status::Covered, heaters)
}

/// Tracks the hardest-to-cover house located so far.
struct Widest {
    binding: Option<Binding>,
    houses: usize,
}

impl Widest {
    fn empty() -> Self {
        Self {
            binding: None,
            houses: 0,
        }
    }

    /// Records a located house, keeping the first house at the largest distance.
    fn update(&mut self, candidate: Binding) {
        self.houses += 1;

        if let Some(current) = self.binding.as_ref()
            && candidate.nearest.distance <= current.nearest.distance
        {
            return;
        }
        self.binding = Some(candidate);
    }

    fn radius(&self) -> u64 {
        self.binding.map_or(0, |b| b.nearest.distance)
    }

    fn finish(self, status: Status, heaters: &Heaters) -> Solution {
        let radius = self.radius();
        debug!(
            ?status,
            radius,
            houses = self.houses,
            heaters = heaters.len(),
            "radius search finished"
        );

        Solution {
            status,
            radius,
            binding: self.binding,
            houses: self.houses,
        }
    }
}
