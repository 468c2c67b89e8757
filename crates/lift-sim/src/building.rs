//! The `Building` struct and its tick loop.

use lift_car::{Elevator, Rider, RiderTag};
use lift_core::{BuildingConfig, ElevatorId, Floor, LiftError, RiderId, SimRng, Tick};
use lift_dispatch::{DispatchContext, DispatchPolicy, WaitingRiders};
use tracing::debug;

use crate::{NoopObserver, SimObserver, SimResult, TickSummary};

/// The simulation: cars, waiting riders and the policy directing them.
///
/// `Building<P>` owns every piece of mutable state.  There is no global
/// instance; drivers construct one with [`BuildingBuilder`][crate::BuildingBuilder]
/// and hold it for as long as the simulation runs.
pub struct Building<P: DispatchPolicy> {
    pub(crate) config:            BuildingConfig,
    pub(crate) tick:              Tick,
    pub(crate) elevators:         Vec<Elevator>,
    pub(crate) waiting:           WaitingRiders,
    pub(crate) policy:            P,
    pub(crate) rng:               SimRng,
    pub(crate) next_rider:        u64,
    pub(crate) delivered:         u64,
    pub(crate) snapshot_interval: u64,
    /// Riders requested since the last tick started, reported to the
    /// observer at the start of the next one.
    pub(crate) fresh:             Vec<RiderId>,
}

impl<P: DispatchPolicy> Building<P> {
    // ── Driving ───────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn update(&mut self) {
        self.step(&mut NoopObserver);
    }

    /// Advance one tick, reporting to `observer`.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);
        self.report_fresh(now, observer);

        let alighted = self.update_elevators(now, observer);
        self.update_controller(now);
        let boarded = self.board_waiting(now, observer);

        let summary = TickSummary {
            tick:      now,
            waiting:   self.waiting.len(),
            onboard:   self.onboard_count(),
            boarded,
            alighted,
            delivered: self.delivered,
        };
        if boarded > 0 || alighted > 0 {
            debug!(tick = now.0, boarded, alighted, waiting = summary.waiting, "tick");
        }
        observer.on_tick_end(&summary);
        if now.is_every(self.snapshot_interval) {
            observer.on_snapshot(now, &self.elevators, &self.waiting);
        }

        self.tick = now.next();
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Run `n` ticks, then tell `observer` the run is over.
    pub fn run<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        self.run_ticks(n, observer);
        observer.on_sim_end(self.tick);
    }

    // ── Rider requests ────────────────────────────────────────────────────

    /// Queue a rider travelling from `start` to `destination`.
    ///
    /// Both floors must exist and differ.
    pub fn request_ride(&mut self, start: Floor, destination: Floor) -> SimResult<RiderId> {
        self.config.check_floor(start)?;
        self.config.check_floor(destination)?;
        if start == destination {
            return Err(LiftError::SameFloor(start).into());
        }
        Ok(self.enqueue(start, destination))
    }

    /// Queue a rider between two distinct, uniformly random floors.
    pub fn create_rider(&mut self) -> RiderId {
        let top = self.config.floor_count;
        let start = Floor(self.rng.gen_range(1..=top));
        let mut destination = Floor(self.rng.gen_range(1..=top));
        while destination == start {
            destination = Floor(self.rng.gen_range(1..=top));
        }
        self.enqueue(start, destination)
    }

    fn enqueue(&mut self, start: Floor, destination: Floor) -> RiderId {
        let id = RiderId(self.next_rider);
        self.next_rider += 1;

        let action_delay = self
            .rng
            .gen_range(self.config.min_action_delay..=self.config.max_action_delay);
        let tag = RiderTag(self.rng.gen_range(0..=0x00ff_ffff));

        debug!(rider = %id, %start, %destination, action_delay, "rider created");
        self.waiting.push(Rider::new(id, start, destination, action_delay, tag));
        self.fresh.push(id);
        id
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn report_fresh<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        for id in self.fresh.drain(..) {
            if let Some(rider) = self.waiting.iter().find(|r| r.id == id) {
                observer.on_rider_created(now, rider);
            }
        }
    }

    /// ① Advance every car, discarding riders who reach their floor.
    fn update_elevators<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let mut alighted = 0;
        for car in &mut self.elevators {
            if let Some(rider) = car.update() {
                observer.on_rider_alighted(now, &rider, car.id());
                alighted += 1;
            }
        }
        self.delivered += alighted as u64;
        alighted
    }

    /// ② Let the policy direct the cars.
    fn update_controller(&mut self, now: Tick) {
        let mut ctx = DispatchContext::new(
            now,
            self.config.floor_count,
            &mut self.elevators,
            &self.waiting,
        );
        self.policy.direct_elevators(&mut ctx);
    }

    /// ③ Board waiting riders, oldest first.
    ///
    /// Each rider tries every car stopped at its floor, in `ElevatorId`
    /// order, until one takes it; riders left over stay queued for the next
    /// tick.
    fn board_waiting<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let elevators = &mut self.elevators;
        let mut boarded: Vec<(RiderId, ElevatorId)> = Vec::new();

        self.waiting.board_with(|mut rider| {
            for car in elevators.iter_mut() {
                if car.floor() != Some(rider.start) || !car.can_board() {
                    continue;
                }
                let entry = (rider.id, car.id());
                match car.add_rider(rider) {
                    Ok(()) => {
                        boarded.push(entry);
                        return Ok(());
                    }
                    Err(refused) => rider = refused,
                }
            }
            Err(rider)
        });

        for &(rider_id, car_id) in &boarded {
            let rider = self
                .elevators
                .get(car_id.index())
                .and_then(|car| car.riders().iter().find(|r| r.id == rider_id));
            if let Some(rider) = rider {
                observer.on_rider_boarded(now, rider, car_id);
            }
        }
        boarded.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The tick the next call to [`update`](Self::update) will process.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.config.floor_count
    }

    /// Every car, in `ElevatorId` order.
    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    /// Riders not yet aboard, oldest first.
    #[inline]
    pub fn waiting(&self) -> &WaitingRiders {
        &self.waiting
    }

    /// Riders waiting at `floor`, oldest first.
    pub fn waiting_at(&self, floor: Floor) -> impl Iterator<Item = &Rider> + '_ {
        self.waiting.at_floor(floor)
    }

    /// Riders aboard any car.
    pub fn onboard_count(&self) -> usize {
        self.elevators.iter().map(Elevator::rider_count).sum()
    }

    /// Riders who have reached their destination so far.
    #[inline]
    pub fn total_delivered(&self) -> u64 {
        self.delivered
    }

    /// Riders requested so far.
    #[inline]
    pub fn total_created(&self) -> u64 {
        self.next_rider
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[inline]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Building-level RNG, for drivers that want reproducible randomness of
    /// their own (derive a [`child`](SimRng::child) rather than draw from it
    /// directly if rider generation must stay unaffected).
    #[inline]
    pub fn rng(&mut self) -> &mut SimRng {
        &mut self.rng
    }
}
