//! Multi-destination itinerary sequencer.
//!
//! An `Itinerary` owns the ordered list of destination legs for a multi-stop
//! trip and keeps the dates internally consistent under editing: reordering,
//! inserting, removing, or editing a leg never leaves an overlap between a
//! leg's arrival and its predecessor's departure.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::{DestinationLeg, DomainError, LegDraft, LegId, TransportMode};

/// Default stay length, in days, for a newly added or date-corrected leg.
pub const DEFAULT_STAY_DAYS: u64 = 3;

/// A single field edit applied to one leg.
///
/// Closed set of editable fields; date edits trigger a full cascade pass over
/// the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegUpdate {
    Name(String),
    City(String),
    Country(String),
    Arrival(NaiveDate),
    Departure(NaiveDate),
    Transport(TransportMode),
}

/// An ordered sequence of destination legs under edit.
///
/// The order is the travel sequence, not a display order. The itinerary also
/// tracks which leg is currently selected in the editor.
///
/// # Invariants
///
/// Re-established before every mutating operation returns:
///
/// - At least one leg is always present.
/// - For every leg `i > 0`, `arrival[i] >= departure[i-1]`.
/// - For every leg, `departure >= arrival`.
///
/// Date conflicts are never surfaced as errors; they are silently repaired by
/// a forward-only [cascade](Itinerary::cascade) that pulls legs later, never
/// earlier. The only guarded precondition is "don't remove the last leg",
/// enforced by ignoring the call.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use voyage_server::domain::Itinerary;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let mut itinerary = Itinerary::new(today);
/// assert_eq!(itinerary.len(), 1);
///
/// itinerary.add_leg();
/// assert_eq!(itinerary.len(), 2);
///
/// // The new leg starts the day its predecessor ends.
/// let legs = itinerary.legs();
/// assert_eq!(legs[1].arrival, legs[0].departure);
/// ```
#[derive(Debug, Clone)]
pub struct Itinerary {
    legs: Vec<DestinationLeg>,
    selected: usize,
    next_id: u64,
    /// Arrival date used when seeding the first leg.
    seed_date: NaiveDate,
}

impl Itinerary {
    /// Creates an itinerary seeded with one empty leg arriving on `today`.
    pub fn new(today: NaiveDate) -> Self {
        let mut itinerary = Self {
            legs: Vec::new(),
            selected: 0,
            next_id: 0,
            seed_date: today,
        };
        itinerary.add_leg();
        itinerary
    }

    /// Creates an itinerary from persisted legs, in the given order.
    ///
    /// The persisted order is trusted: no cascade runs on load, only on
    /// subsequent edits. Drafts missing a date get the same defaults a new
    /// leg would (arrival = previous departure, stay of
    /// [`DEFAULT_STAY_DAYS`]).
    ///
    /// # Errors
    ///
    /// Returns `Err` if `drafts` is empty (an itinerary under edit always has
    /// at least one leg).
    pub fn from_drafts(drafts: Vec<LegDraft>, today: NaiveDate) -> Result<Self, DomainError> {
        if drafts.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        let mut itinerary = Self {
            legs: Vec::new(),
            selected: 0,
            next_id: 0,
            seed_date: today,
        };

        for draft in drafts {
            let arrival = draft.arrival.unwrap_or_else(|| itinerary.next_arrival());
            let departure = draft
                .departure
                .unwrap_or_else(|| plus_default_stay(arrival));
            let id = itinerary.allocate_id();
            itinerary.legs.push(DestinationLeg {
                id,
                name: draft.name,
                city: draft.city,
                country: draft.country,
                arrival,
                departure,
                transport: draft.transport,
            });
        }

        Ok(itinerary)
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[DestinationLeg] {
        &self.legs
    }

    /// Returns the number of legs (always at least 1).
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Returns the index of the currently selected leg.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the currently selected leg.
    pub fn selected_leg(&self) -> &DestinationLeg {
        // Safe: never empty, selection kept in range by every mutation
        &self.legs[self.selected]
    }

    /// Selects the leg at `index`. No-op if out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.legs.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Appends a new leg and selects it.
    ///
    /// The new leg arrives the day the current last leg departs (or on the
    /// itinerary's seed date if there are no legs yet) and stays for
    /// [`DEFAULT_STAY_DAYS`]. Always succeeds.
    pub fn add_leg(&mut self) -> LegId {
        let arrival = self.next_arrival();
        let departure = plus_default_stay(arrival);
        let id = self.allocate_id();

        self.legs.push(DestinationLeg {
            id,
            name: String::new(),
            city: String::new(),
            country: String::new(),
            arrival,
            departure,
            transport: TransportMode::None,
        });
        self.selected = self.legs.len() - 1;
        id
    }

    /// Removes the leg at `index`.
    ///
    /// Refuses to remove the last remaining leg, and ignores an out-of-range
    /// index; both cases return `false` without touching the sequence. After
    /// a removal the leg now at `index` may overlap its new predecessor, so
    /// the cascade runs. The selection is kept in range.
    pub fn remove_leg(&mut self, index: usize) -> bool {
        if self.legs.len() <= 1 || index >= self.legs.len() {
            return false;
        }

        self.legs.remove(index);
        if self.selected > index {
            self.selected -= 1;
        }
        self.selected = self.selected.min(self.legs.len() - 1);
        self.cascade();
        true
    }

    /// Applies a single field edit to the leg at `index`.
    ///
    /// Date edits run the full cascade so downstream legs are corrected in
    /// one pass. Returns `false` (leaving the sequence untouched) if `index`
    /// is out of range.
    pub fn update_leg(&mut self, index: usize, update: LegUpdate) -> bool {
        let Some(leg) = self.legs.get_mut(index) else {
            return false;
        };

        let dates_changed = matches!(update, LegUpdate::Arrival(_) | LegUpdate::Departure(_));
        match update {
            LegUpdate::Name(name) => leg.name = name,
            LegUpdate::City(city) => leg.city = city,
            LegUpdate::Country(country) => leg.country = country,
            LegUpdate::Arrival(arrival) => leg.arrival = arrival,
            LegUpdate::Departure(departure) => leg.departure = departure,
            LegUpdate::Transport(transport) => leg.transport = transport,
        }

        if dates_changed {
            self.cascade();
        }
        true
    }

    /// Moves the leg at `from` to position `to`, shifting the legs between
    /// them by one (standard list-splice move), then runs the cascade.
    ///
    /// A pure list operation: the same legs remain in the sequence, only the
    /// order changes. The selection follows the previously selected leg.
    /// Out-of-range indices make this a no-op returning `false`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.legs.len() || to >= self.legs.len() {
            return false;
        }
        if from == to {
            return true;
        }

        let selected_id = self.legs[self.selected].id;
        let leg = self.legs.remove(from);
        self.legs.insert(to, leg);
        self.selected = self
            .legs
            .iter()
            .position(|l| l.id == selected_id)
            .unwrap_or(0);
        self.cascade();
        true
    }

    /// Forward date-correction pass.
    ///
    /// Walks the sequence left to right and pulls each leg later (never
    /// earlier) until no leg arrives before its predecessor departs and no
    /// leg departs before it arrives. A pulled or repaired leg's stay is
    /// reset to [`DEFAULT_STAY_DAYS`], discarding the previously chosen
    /// duration. Idempotent: a second pass changes nothing.
    ///
    /// Returns `true` if any date was adjusted.
    pub fn cascade(&mut self) -> bool {
        let mut changed = false;

        for i in 0..self.legs.len() {
            if i > 0 {
                let prev_departure = self.legs[i - 1].departure;
                if self.legs[i].arrival < prev_departure {
                    debug!(
                        leg = %self.legs[i].id,
                        from = %self.legs[i].arrival,
                        to = %prev_departure,
                        "pulling leg arrival forward"
                    );
                    self.legs[i].arrival = prev_departure;
                    self.legs[i].departure = plus_default_stay(prev_departure);
                    changed = true;
                }
            }
            if self.legs[i].departure < self.legs[i].arrival {
                self.legs[i].departure = plus_default_stay(self.legs[i].arrival);
                changed = true;
            }
        }

        changed
    }

    /// Arrival date for a leg appended right now.
    fn next_arrival(&self) -> NaiveDate {
        self.legs
            .last()
            .map(|leg| leg.departure)
            .unwrap_or(self.seed_date)
    }

    fn allocate_id(&mut self) -> LegId {
        let id = LegId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// `date + DEFAULT_STAY_DAYS`, saturating at the calendar bound.
fn plus_default_stay(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(DEFAULT_STAY_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 1, 1)
    }

    /// Itinerary [A: Jan1-Jan5], [B: arr-dep] per arguments.
    fn two_leg_itinerary(
        b_arrival: NaiveDate,
        b_departure: NaiveDate,
    ) -> Itinerary {
        Itinerary::from_drafts(
            vec![
                LegDraft::new("Paris", "France", date(2024, 1, 1), date(2024, 1, 5)),
                LegDraft::new("Rome", "Italy", b_arrival, b_departure),
            ],
            today(),
        )
        .unwrap()
    }

    #[test]
    fn new_seeds_one_leg() {
        let itinerary = Itinerary::new(today());

        assert_eq!(itinerary.len(), 1);
        assert_eq!(itinerary.selected_index(), 0);
        assert_eq!(itinerary.legs()[0].arrival, today());
        assert_eq!(itinerary.legs()[0].stay_days(), DEFAULT_STAY_DAYS as i64);
    }

    #[test]
    fn from_drafts_empty_rejected() {
        let result = Itinerary::from_drafts(vec![], today());
        assert!(matches!(result, Err(DomainError::EmptyItinerary)));
    }

    #[test]
    fn from_drafts_trusts_persisted_order() {
        // Overlapping dates straight from storage stay as-is until an edit.
        let itinerary = two_leg_itinerary(date(2024, 1, 3), date(2024, 1, 10));

        assert_eq!(itinerary.legs()[1].arrival, date(2024, 1, 3));
        assert_eq!(itinerary.legs()[1].departure, date(2024, 1, 10));
    }

    #[test]
    fn from_drafts_fills_missing_dates() {
        let first = LegDraft::new("Lisbon", "Portugal", date(2024, 2, 1), date(2024, 2, 4));
        let second = LegDraft {
            city: "Porto".into(),
            ..LegDraft::default()
        };

        let itinerary = Itinerary::from_drafts(vec![first, second], today()).unwrap();

        assert_eq!(itinerary.legs()[1].arrival, date(2024, 2, 4));
        assert_eq!(itinerary.legs()[1].departure, date(2024, 2, 7));
    }

    #[test]
    fn add_leg_defaults_from_last() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 6), date(2024, 1, 9));

        itinerary.add_leg();

        let legs = itinerary.legs();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[2].arrival, date(2024, 1, 9));
        assert_eq!(legs[2].departure, date(2024, 1, 12));
        assert_eq!(itinerary.selected_index(), 2);
    }

    #[test]
    fn add_leg_default_duration() {
        let mut itinerary = Itinerary::new(today());
        itinerary.add_leg();

        let leg = itinerary.selected_leg();
        assert_eq!((leg.departure - leg.arrival).num_days(), 3);
    }

    #[test]
    fn add_leg_ids_unique() {
        let mut itinerary = Itinerary::new(today());
        let a = itinerary.add_leg();
        let b = itinerary.add_leg();

        assert_ne!(a, b);
        let ids: Vec<_> = itinerary.legs().iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn remove_last_remaining_leg_is_noop() {
        let mut itinerary = Itinerary::new(today());

        assert!(!itinerary.remove_leg(0));
        assert_eq!(itinerary.len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 6), date(2024, 1, 9));

        assert!(!itinerary.remove_leg(5));
        assert_eq!(itinerary.len(), 2);
    }

    #[test]
    fn remove_first_leg_leaves_successor_unchanged() {
        // [A: Jan1-Jan5], [B: Jan6-Jan9]; removing A leaves [B] as-is.
        let mut itinerary = two_leg_itinerary(date(2024, 1, 6), date(2024, 1, 9));

        assert!(itinerary.remove_leg(0));

        let legs = itinerary.legs();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].city, "Rome");
        assert_eq!(legs[0].arrival, date(2024, 1, 6));
        assert_eq!(legs[0].departure, date(2024, 1, 9));
    }

    #[test]
    fn remove_middle_leg_cascades_successor() {
        let mut itinerary = Itinerary::from_drafts(
            vec![
                LegDraft::new("Paris", "France", date(2024, 1, 1), date(2024, 1, 10)),
                LegDraft::new("Rome", "Italy", date(2024, 1, 10), date(2024, 1, 12)),
                LegDraft::new("Athens", "Greece", date(2024, 1, 2), date(2024, 1, 8)),
            ],
            today(),
        )
        .unwrap();

        // Removing Rome puts Athens after Paris; Athens arrives Jan 2,
        // before Paris departs Jan 10, so it gets pulled.
        assert!(itinerary.remove_leg(1));

        let legs = itinerary.legs();
        assert_eq!(legs[1].city, "Athens");
        assert_eq!(legs[1].arrival, date(2024, 1, 10));
        assert_eq!(legs[1].departure, date(2024, 1, 13));
    }

    #[test]
    fn remove_adjusts_selection() {
        let mut itinerary = Itinerary::new(today());
        itinerary.add_leg();
        itinerary.add_leg();
        assert_eq!(itinerary.selected_index(), 2);

        itinerary.remove_leg(2);
        assert_eq!(itinerary.selected_index(), 1);

        itinerary.select(1);
        itinerary.remove_leg(0);
        assert_eq!(itinerary.selected_index(), 0);
    }

    #[test]
    fn update_label_fields() {
        let mut itinerary = Itinerary::new(today());

        assert!(itinerary.update_leg(0, LegUpdate::Name("Honeymoon stop".into())));
        assert!(itinerary.update_leg(0, LegUpdate::City("Venice".into())));
        assert!(itinerary.update_leg(0, LegUpdate::Country("Italy".into())));
        assert!(itinerary.update_leg(0, LegUpdate::Transport(TransportMode::Train)));

        let leg = &itinerary.legs()[0];
        assert_eq!(leg.name, "Honeymoon stop");
        assert_eq!(leg.city, "Venice");
        assert_eq!(leg.country, "Italy");
        assert_eq!(leg.transport, TransportMode::Train);
    }

    #[test]
    fn update_out_of_range_is_noop() {
        let mut itinerary = Itinerary::new(today());
        assert!(!itinerary.update_leg(3, LegUpdate::City("Nowhere".into())));
    }

    #[test]
    fn update_departure_cascades_downstream() {
        let mut itinerary = Itinerary::from_drafts(
            vec![
                LegDraft::new("Paris", "France", date(2024, 1, 1), date(2024, 1, 5)),
                LegDraft::new("Rome", "Italy", date(2024, 1, 5), date(2024, 1, 8)),
                LegDraft::new("Athens", "Greece", date(2024, 1, 8), date(2024, 1, 11)),
            ],
            today(),
        )
        .unwrap();

        // Extending Paris to Jan 9 pulls Rome to Jan 9-12, which pulls
        // Athens to Jan 12-15: the full chain is corrected in one edit.
        assert!(itinerary.update_leg(0, LegUpdate::Departure(date(2024, 1, 9))));

        let legs = itinerary.legs();
        assert_eq!(legs[1].arrival, date(2024, 1, 9));
        assert_eq!(legs[1].departure, date(2024, 1, 12));
        assert_eq!(legs[2].arrival, date(2024, 1, 12));
        assert_eq!(legs[2].departure, date(2024, 1, 15));
    }

    #[test]
    fn update_departure_earlier_leaves_successor_alone() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 6), date(2024, 1, 9));

        // Shortening the first stay opens a gap; gaps are fine, nothing is
        // ever pulled earlier.
        assert!(itinerary.update_leg(0, LegUpdate::Departure(date(2024, 1, 3))));

        assert_eq!(itinerary.legs()[1].arrival, date(2024, 1, 6));
        assert_eq!(itinerary.legs()[1].departure, date(2024, 1, 9));
    }

    #[test]
    fn update_departure_before_arrival_repaired() {
        let mut itinerary = Itinerary::new(today());

        assert!(itinerary.update_leg(0, LegUpdate::Departure(date(2023, 12, 25))));

        let leg = &itinerary.legs()[0];
        assert_eq!(leg.arrival, today());
        assert_eq!(leg.departure, date(2024, 1, 4));
    }

    #[test]
    fn basic_cascade_scenario() {
        // [A: Jan1-Jan5], [B: Jan3-Jan10]: B arrives before A departs.
        let mut itinerary = two_leg_itinerary(date(2024, 1, 3), date(2024, 1, 10));

        assert!(itinerary.cascade());

        let legs = itinerary.legs();
        assert_eq!(legs[1].arrival, date(2024, 1, 5));
        assert_eq!(legs[1].departure, date(2024, 1, 8));
    }

    #[test]
    fn reorder_triggers_cascade_scenario() {
        // [A: Jan1-Jan5], [B: Jan6-Jan9], [C: Jan10-Jan14] -> [C, A, B].
        let mut itinerary = Itinerary::from_drafts(
            vec![
                LegDraft::new("A", "X", date(2024, 1, 1), date(2024, 1, 5)),
                LegDraft::new("B", "X", date(2024, 1, 6), date(2024, 1, 9)),
                LegDraft::new("C", "X", date(2024, 1, 10), date(2024, 1, 14)),
            ],
            today(),
        )
        .unwrap();

        assert!(itinerary.reorder(2, 0));

        let legs = itinerary.legs();
        assert_eq!(legs[0].city, "C");
        assert_eq!(legs[1].city, "A");
        assert_eq!(legs[2].city, "B");

        // A pulled to C's departure, B pulled to A's new departure.
        assert_eq!(legs[1].arrival, date(2024, 1, 14));
        assert_eq!(legs[1].departure, date(2024, 1, 17));
        assert_eq!(legs[2].arrival, date(2024, 1, 17));
        assert_eq!(legs[2].departure, date(2024, 1, 20));
    }

    #[test]
    fn reorder_same_index_is_identity() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 6), date(2024, 1, 9));
        let before = itinerary.legs().to_vec();

        assert!(itinerary.reorder(1, 1));
        assert_eq!(itinerary.legs(), &before[..]);
    }

    #[test]
    fn reorder_out_of_range_is_noop() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 6), date(2024, 1, 9));
        let before = itinerary.legs().to_vec();

        assert!(!itinerary.reorder(0, 7));
        assert!(!itinerary.reorder(7, 0));
        assert_eq!(itinerary.legs(), &before[..]);
    }

    #[test]
    fn reorder_selection_follows_leg() {
        let mut itinerary = Itinerary::from_drafts(
            vec![
                LegDraft::new("A", "X", date(2024, 1, 1), date(2024, 1, 5)),
                LegDraft::new("B", "X", date(2024, 1, 6), date(2024, 1, 9)),
                LegDraft::new("C", "X", date(2024, 1, 10), date(2024, 1, 14)),
            ],
            today(),
        )
        .unwrap();
        itinerary.select(0);

        itinerary.reorder(0, 2);

        assert_eq!(itinerary.selected_index(), 2);
        assert_eq!(itinerary.selected_leg().city, "A");
    }

    #[test]
    fn cascade_idempotent() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 3), date(2024, 1, 10));

        assert!(itinerary.cascade());
        let after_first = itinerary.legs().to_vec();

        assert!(!itinerary.cascade());
        assert_eq!(itinerary.legs(), &after_first[..]);
    }

    #[test]
    fn cascade_no_change_on_valid_sequence() {
        let mut itinerary = two_leg_itinerary(date(2024, 1, 5), date(2024, 1, 9));
        assert!(!itinerary.cascade());
    }

    #[test]
    fn select_out_of_range_rejected() {
        let mut itinerary = Itinerary::new(today());
        assert!(!itinerary.select(1));
        assert_eq!(itinerary.selected_index(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// An arbitrary editing operation with unclamped indices; indices are
    /// reduced modulo the current length when applied so every op is valid
    /// "shape", exercising in-range and out-of-range paths alike.
    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove(usize),
        Reorder(usize, usize),
        SetArrival(usize, i64),
        SetDeparture(usize, i64),
        SetCity(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            (0usize..12).prop_map(Op::Remove),
            (0usize..12, 0usize..12).prop_map(|(a, b)| Op::Reorder(a, b)),
            (0usize..12, -30i64..60).prop_map(|(i, d)| Op::SetArrival(i, d)),
            (0usize..12, -30i64..60).prop_map(|(i, d)| Op::SetDeparture(i, d)),
            (0usize..12).prop_map(Op::SetCity),
        ]
    }

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn apply(itinerary: &mut Itinerary, op: &Op) {
        let len = itinerary.len();
        match op {
            Op::Add => {
                itinerary.add_leg();
            }
            Op::Remove(i) => {
                itinerary.remove_leg(i % (len + 1));
            }
            Op::Reorder(a, b) => {
                itinerary.reorder(a % (len + 1), b % (len + 1));
            }
            Op::SetArrival(i, days) => {
                let date = base_date() + chrono::Duration::days(*days);
                itinerary.update_leg(i % (len + 1), LegUpdate::Arrival(date));
            }
            Op::SetDeparture(i, days) => {
                let date = base_date() + chrono::Duration::days(*days);
                itinerary.update_leg(i % (len + 1), LegUpdate::Departure(date));
            }
            Op::SetCity(i) => {
                itinerary.update_leg(i % (len + 1), LegUpdate::City("Oslo".into()));
            }
        }
    }

    fn assert_invariants(itinerary: &Itinerary) {
        let legs = itinerary.legs();
        assert!(!legs.is_empty(), "itinerary must never become empty");
        assert!(
            itinerary.selected_index() < legs.len(),
            "selection must stay in range"
        );
        for leg in legs {
            assert!(
                leg.departure >= leg.arrival,
                "leg {} departs {} before arriving {}",
                leg.id,
                leg.departure,
                leg.arrival
            );
        }
        for window in legs.windows(2) {
            assert!(
                window[1].arrival >= window[0].departure,
                "leg {} arrives {} before predecessor departs {}",
                window[1].id,
                window[1].arrival,
                window[0].departure
            );
        }
    }

    proptest! {
        /// Invariants hold after every operation in any edit sequence.
        #[test]
        fn invariants_preserved(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut itinerary = Itinerary::new(base_date());
            for op in &ops {
                apply(&mut itinerary, op);
                assert_invariants(&itinerary);
            }
        }

        /// The itinerary never shrinks below one leg.
        #[test]
        fn minimum_length(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut itinerary = Itinerary::new(base_date());
            for op in &ops {
                apply(&mut itinerary, op);
                prop_assert!(itinerary.len() >= 1);
            }
        }

        /// Reorder is a permutation: same leg ids, none added or dropped.
        #[test]
        fn reorder_preserves_membership(
            extra_legs in 0usize..6,
            from in 0usize..8,
            to in 0usize..8,
        ) {
            let mut itinerary = Itinerary::new(base_date());
            for _ in 0..extra_legs {
                itinerary.add_leg();
            }

            let mut before: Vec<LegId> = itinerary.legs().iter().map(|l| l.id).collect();
            itinerary.reorder(from % itinerary.len(), to % itinerary.len());
            let mut after: Vec<LegId> = itinerary.legs().iter().map(|l| l.id).collect();

            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        /// The cascade is a fixed-point operation.
        #[test]
        fn cascade_idempotent(ops in prop::collection::vec(op_strategy(), 0..30)) {
            let mut itinerary = Itinerary::new(base_date());
            for op in &ops {
                apply(&mut itinerary, op);
            }

            itinerary.cascade();
            let once = itinerary.legs().to_vec();
            prop_assert!(!itinerary.cascade());
            prop_assert_eq!(itinerary.legs(), &once[..]);
        }

        /// A freshly added leg always has the default stay length.
        #[test]
        fn added_leg_default_duration(ops in prop::collection::vec(op_strategy(), 0..20)) {
            let mut itinerary = Itinerary::new(base_date());
            for op in &ops {
                apply(&mut itinerary, op);
            }

            itinerary.add_leg();
            let leg = itinerary.selected_leg();
            prop_assert_eq!(
                (leg.departure - leg.arrival).num_days(),
                DEFAULT_STAY_DAYS as i64
            );
        }
    }
}
