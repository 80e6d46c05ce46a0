use std::collections::{HashMap, HashSet};

use civicstats_coordinates::CoordinateStore;
use civicstats_core::{CoordinateId, Entity, PartyId, StoreResult};
use civicstats_parties::PartyStore;
use civicstats_users::UserStore;

use crate::aggregate::{GeoFilter, PartyAggregate, Tally};

/// Party-membership aggregation over the three entity stores.
///
/// Holds no state of its own: every call reads fresh snapshots. Cost is one
/// coordinate query, one full user scan and at most one party lookup per
/// distinct `party_id` in scope.
#[derive(Debug, Clone)]
pub struct StatisticsEngine<C, U, P> {
    coordinates: C,
    users: U,
    parties: P,
}

impl<C, U, P> StatisticsEngine<C, U, P>
where
    C: CoordinateStore,
    U: UserStore,
    P: PartyStore,
{
    pub fn new(coordinates: C, users: U, parties: P) -> Self {
        Self {
            coordinates,
            users,
            parties,
        }
    }

    /// Member count per party name among users located in `city`.
    pub fn statistics_by_city(&self, city: &str) -> StoreResult<Vec<PartyAggregate>> {
        Ok(self.tally(GeoFilter::city(city))?.records)
    }

    /// Member count per party name among users located in `country`.
    pub fn statistics_by_country(&self, country: &str) -> StoreResult<Vec<PartyAggregate>> {
        Ok(self.tally(GeoFilter::country(country))?.records)
    }

    /// Run the join + group-by for `filter`.
    ///
    /// Users without a party, or whose party no longer exists, are skipped.
    /// Only storage failures are errors.
    pub fn tally(&self, filter: GeoFilter) -> StoreResult<Tally> {
        let coordinates = match &filter {
            GeoFilter::City(city) => self.coordinates.find_by_city(city)?,
            GeoFilter::Country(country) => self.coordinates.find_by_country(country)?,
        };
        let in_scope: HashSet<CoordinateId> =
            coordinates.into_iter().map(|c| c.id().clone()).collect();

        if in_scope.is_empty() {
            tracing::debug!(field = filter.field(), value = filter.value(), "no matching coordinates");
            return Ok(Tally::empty(filter));
        }

        let users = self.users.find_all()?;

        // party_id -> resolved name (None = dangling), one lookup per id.
        let mut resolved: HashMap<PartyId, Option<String>> = HashMap::new();
        // party name -> index into `counts`; keeps first-encounter order.
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, u64)> = Vec::new();
        let mut dangling_party_refs = 0u64;

        for user in users.iter().filter(|u| in_scope.contains(u.coordinate_id())) {
            let Some(party_id) = user.party_id() else {
                continue;
            };

            let name = match resolved.get(party_id) {
                Some(cached) => cached.clone(),
                None => {
                    let name = self
                        .parties
                        .find_by_id(party_id)?
                        .map(|p| p.name().to_string());
                    resolved.insert(party_id.clone(), name.clone());
                    name
                }
            };

            let Some(name) = name else {
                dangling_party_refs += 1;
                tracing::debug!(user_id = %user.id(), party_id = %party_id, "skipping dangling party reference");
                continue;
            };

            match positions.get(&name) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    positions.insert(name.clone(), counts.len());
                    counts.push((name, 1));
                }
            }
        }

        let records = counts
            .into_iter()
            .map(|(party_name, member_count)| PartyAggregate {
                party_name,
                scope: filter.clone(),
                member_count,
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            field = filter.field(),
            value = filter.value(),
            parties = records.len(),
            dangling_party_refs,
            "statistics computed"
        );

        Ok(Tally {
            filter,
            records,
            dangling_party_refs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use civicstats_coordinates::{Coordinate, CoordinateDraft};
    use civicstats_core::{StoreError, UserId};
    use civicstats_infra::store::{InMemoryCoordinateStore, InMemoryPartyStore, InMemoryUserStore};
    use civicstats_parties::{Party, PartyDraft};
    use civicstats_users::{User, UserDraft};

    use super::*;

    type TestEngine = StatisticsEngine<
        Arc<InMemoryCoordinateStore>,
        Arc<InMemoryUserStore>,
        Arc<InMemoryPartyStore>,
    >;

    struct World {
        coordinates: Arc<InMemoryCoordinateStore>,
        users: Arc<InMemoryUserStore>,
        parties: Arc<InMemoryPartyStore>,
        engine: TestEngine,
    }

    impl World {
        fn new() -> Self {
            let coordinates = Arc::new(InMemoryCoordinateStore::new());
            let users = Arc::new(InMemoryUserStore::new());
            let parties = Arc::new(InMemoryPartyStore::new());
            let engine = StatisticsEngine::new(coordinates.clone(), users.clone(), parties.clone());
            Self {
                coordinates,
                users,
                parties,
                engine,
            }
        }

        fn coordinate(&self, city: &str, country: &str) -> Coordinate {
            self.coordinates
                .save(CoordinateDraft::new(city, country).unwrap())
                .unwrap()
        }

        fn party(&self, name: &str) -> Party {
            self.parties.save(PartyDraft::new(name).unwrap()).unwrap()
        }

        fn user(&self, coordinate: &Coordinate, party: Option<&str>) -> User {
            let n = self.users.len().unwrap();
            self.users
                .save(
                    UserDraft::new(
                        format!("user{n}@example.com"),
                        "pass",
                        coordinate.id().as_str(),
                        party.map(str::to_string),
                    )
                    .unwrap(),
                )
                .unwrap()
        }
    }

    fn as_map(records: &[PartyAggregate]) -> BTreeMap<String, u64> {
        records
            .iter()
            .map(|r| (r.party_name.clone(), r.member_count))
            .collect()
    }

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn aggregates_users_by_party_in_a_city() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        let lr = w.party("LR");
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, Some(lr.id().as_str()));

        let stats = w.engine.statistics_by_city("Lyon").unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(as_map(&stats), counts(&[("PS", 2), ("LR", 1)]));
        assert!(stats.iter().all(|r| r.scope == GeoFilter::city("Lyon")));
    }

    #[test]
    fn users_without_party_are_excluded() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        let lr = w.party("LR");
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, Some(lr.id().as_str()));
        w.user(&lyon, None);

        let stats = w.engine.statistics_by_city("Lyon").unwrap();
        assert_eq!(as_map(&stats), counts(&[("PS", 2), ("LR", 1)]));
    }

    #[test]
    fn one_member_and_one_unaffiliated_totals_one() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, None);

        let tally = w.engine.tally(GeoFilter::city("Lyon")).unwrap();
        assert_eq!(tally.total_members(), 1);
    }

    #[test]
    fn aggregates_across_cities_of_a_country() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let paris = w.coordinate("Paris", "France");
        let berlin = w.coordinate("Berlin", "Germany");
        let ps = w.party("PS");
        let lr = w.party("LR");
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&paris, Some(ps.id().as_str()));
        w.user(&lyon, Some(lr.id().as_str()));
        w.user(&berlin, Some(lr.id().as_str()));

        let stats = w.engine.statistics_by_country("France").unwrap();
        assert_eq!(as_map(&stats), counts(&[("PS", 2), ("LR", 1)]));
        assert!(stats.iter().all(|r| r.scope == GeoFilter::country("France")));
    }

    #[test]
    fn unknown_city_or_country_is_empty_not_an_error() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        w.coordinate("Berlin", "Germany");
        let ps = w.party("PS");
        w.user(&lyon, Some(ps.id().as_str()));

        assert!(w.engine.statistics_by_city("Atlantis").unwrap().is_empty());
        assert!(w.engine.statistics_by_country("Spain").unwrap().is_empty());
    }

    #[test]
    fn coordinates_without_users_yield_empty() {
        let w = World::new();
        w.coordinate("Lyon", "France");
        w.party("PS");
        assert!(w.engine.statistics_by_city("Lyon").unwrap().is_empty());
    }

    #[test]
    fn filter_is_exact_and_case_sensitive() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        w.user(&lyon, Some(ps.id().as_str()));

        assert!(w.engine.statistics_by_city("lyon").unwrap().is_empty());
        assert!(w.engine.statistics_by_city("Lyon ").unwrap().is_empty());
        assert!(w.engine.statistics_by_country("FRANCE").unwrap().is_empty());
        assert_eq!(w.engine.statistics_by_city("Lyon").unwrap().len(), 1);
    }

    #[test]
    fn dangling_party_is_skipped_and_counted() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, Some("ghost"));
        w.user(&lyon, Some("ghost"));

        let tally = w.engine.tally(GeoFilter::city("Lyon")).unwrap();
        assert_eq!(as_map(&tally.records), counts(&[("PS", 1)]));
        assert_eq!(tally.dangling_party_refs, 2);
    }

    #[test]
    fn deleted_party_becomes_dangling() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        w.user(&lyon, Some(ps.id().as_str()));
        w.parties.delete(ps.id()).unwrap();

        let tally = w.engine.tally(GeoFilter::city("Lyon")).unwrap();
        assert!(tally.records.is_empty());
        assert_eq!(tally.dangling_party_refs, 1);
    }

    #[test]
    fn parties_sharing_a_name_merge_counts() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let a = w.party("PS");
        let b = w.party("PS");
        w.user(&lyon, Some(a.id().as_str()));
        w.user(&lyon, Some(b.id().as_str()));

        let stats = w.engine.statistics_by_city("Lyon").unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].member_count, 2);
    }

    #[test]
    fn user_with_unknown_coordinate_is_ignored() {
        let w = World::new();
        w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        w.users
            .save(UserDraft::new("x@y.z", "pw", "nowhere", Some(ps.id().to_string())).unwrap())
            .unwrap();
        assert!(w.engine.statistics_by_city("Lyon").unwrap().is_empty());
    }

    #[test]
    fn reads_see_latest_writes() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        let u = w.user(&lyon, Some(ps.id().as_str()));
        assert_eq!(w.engine.statistics_by_city("Lyon").unwrap().len(), 1);

        w.users.delete(u.id()).unwrap();
        assert!(w.engine.statistics_by_city("Lyon").unwrap().is_empty());
    }

    #[test]
    fn engine_never_mutates_stores() {
        let w = World::new();
        let lyon = w.coordinate("Lyon", "France");
        let ps = w.party("PS");
        w.user(&lyon, Some(ps.id().as_str()));
        w.user(&lyon, Some("ghost"));

        let before = (
            w.coordinates.find_all().unwrap(),
            w.users.find_all().unwrap(),
            w.parties.find_all().unwrap(),
        );
        w.engine.statistics_by_city("Lyon").unwrap();
        w.engine.statistics_by_country("France").unwrap();
        let after = (
            w.coordinates.find_all().unwrap(),
            w.users.find_all().unwrap(),
            w.parties.find_all().unwrap(),
        );
        assert_eq!(before, after);
    }

    /// Party store that counts point lookups.
    struct CountingParties {
        inner: InMemoryPartyStore,
        lookups: AtomicUsize,
    }

    impl PartyStore for CountingParties {
        fn find_all(&self) -> StoreResult<Vec<Party>> {
            self.inner.find_all()
        }

        fn find_by_id(&self, id: &PartyId) -> StoreResult<Option<Party>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_id(id)
        }

        fn find_by_name(&self, name: &str) -> StoreResult<Option<Party>> {
            self.inner.find_by_name(name)
        }

        fn save(&self, draft: PartyDraft) -> StoreResult<Party> {
            self.inner.save(draft)
        }

        fn update(&self, id: &PartyId, draft: PartyDraft) -> StoreResult<Option<Party>> {
            self.inner.update(id, draft)
        }

        fn delete(&self, id: &PartyId) -> StoreResult<bool> {
            self.inner.delete(id)
        }
    }

    #[test]
    fn one_party_lookup_per_distinct_party_id() {
        let coordinates = InMemoryCoordinateStore::new();
        let users = InMemoryUserStore::new();
        let parties = CountingParties {
            inner: InMemoryPartyStore::new(),
            lookups: AtomicUsize::new(0),
        };

        let lyon = coordinates.save(CoordinateDraft::new("Lyon", "France").unwrap()).unwrap();
        let ps = parties.save(PartyDraft::new("PS").unwrap()).unwrap();
        for i in 0..5 {
            users
                .save(
                    UserDraft::new(
                        format!("u{i}@example.com"),
                        "pw",
                        lyon.id().as_str(),
                        Some(ps.id().to_string()),
                    )
                    .unwrap(),
                )
                .unwrap();
        }
        users
            .save(UserDraft::new("g@example.com", "pw", lyon.id().as_str(), Some("ghost".into())).unwrap())
            .unwrap();

        let engine = StatisticsEngine::new(coordinates, users, parties);
        let tally = engine.tally(GeoFilter::city("Lyon")).unwrap();
        assert_eq!(tally.total_members(), 5);
        assert_eq!(engine.parties.lookups.load(Ordering::SeqCst), 2);
    }

    struct DownUsers;

    impl UserStore for DownUsers {
        fn find_all(&self) -> StoreResult<Vec<User>> {
            Err(StoreError::unavailable("users offline"))
        }

        fn find_by_id(&self, _id: &UserId) -> StoreResult<Option<User>> {
            Err(StoreError::unavailable("users offline"))
        }

        fn find_by_email(&self, _email: &str) -> StoreResult<Option<User>> {
            Err(StoreError::unavailable("users offline"))
        }

        fn save(&self, _draft: UserDraft) -> StoreResult<User> {
            Err(StoreError::unavailable("users offline"))
        }

        fn update(&self, _id: &UserId, _draft: UserDraft) -> StoreResult<Option<User>> {
            Err(StoreError::unavailable("users offline"))
        }

        fn delete(&self, _id: &UserId) -> StoreResult<bool> {
            Err(StoreError::unavailable("users offline"))
        }
    }

    #[test]
    fn storage_failure_propagates() {
        let coordinates = InMemoryCoordinateStore::new();
        coordinates.save(CoordinateDraft::new("Lyon", "France").unwrap()).unwrap();
        let engine = StatisticsEngine::new(coordinates, DownUsers, InMemoryPartyStore::new());

        assert_eq!(
            engine.statistics_by_city("Lyon"),
            Err(StoreError::Unavailable("users offline".to_string()))
        );
        // No coordinate match: the user store is never consulted.
        assert_eq!(engine.statistics_by_city("Paris"), Ok(vec![]));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::Index;

        const CITIES: [(&str, &str); 3] = [("Lyon", "France"), ("Paris", "France"), ("Berlin", "Germany")];
        const PARTY_NAMES: [&str; 3] = ["PS", "LR", "PS"];

        /// Seeds a world; users pick a coordinate and optionally a party slot.
        /// Slot `PARTY_NAMES.len()` is a dangling id.
        fn seed(coords: &[usize], users: &[(Index, Option<Index>)]) -> (World, Vec<(usize, Option<usize>)>) {
            let w = World::new();
            let stored: Vec<Coordinate> = coords
                .iter()
                .map(|&c| w.coordinate(CITIES[c].0, CITIES[c].1))
                .collect();
            let parties: Vec<Party> = PARTY_NAMES.iter().map(|n| w.party(n)).collect();

            let mut placed = Vec::new();
            for (coord, party) in users {
                let ci = coord.index(stored.len());
                let pi = party.as_ref().map(|p| p.index(parties.len() + 1));
                let party_id = pi.map(|i| match parties.get(i) {
                    Some(p) => p.id().to_string(),
                    None => "ghost".to_string(),
                });
                w.user(&stored[ci], party_id.as_deref());
                placed.push((coords[ci], pi));
            }
            (w, placed)
        }

        fn merge(a: BTreeMap<String, u64>, b: BTreeMap<String, u64>) -> BTreeMap<String, u64> {
            let mut out = a;
            for (k, v) in b {
                *out.entry(k).or_insert(0) += v;
            }
            out
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: sum of counts equals users in the city with a resolvable party.
            #[test]
            fn city_total_matches_resolvable_members(
                coords in prop::collection::vec(0usize..CITIES.len(), 1..6),
                users in prop::collection::vec((any::<Index>(), prop::option::of(any::<Index>())), 0..40),
            ) {
                let (w, placed) = seed(&coords, &users);
                for (ci, (city, _)) in CITIES.iter().enumerate() {
                    let expected = placed
                        .iter()
                        .filter(|(c, p)| *c == ci && matches!(p, Some(i) if *i < PARTY_NAMES.len()))
                        .count() as u64;
                    let tally = w.engine.tally(GeoFilter::city(*city)).unwrap();
                    prop_assert_eq!(tally.total_members(), expected);
                }
            }

            /// Property: cities sharing a country partition that country's counts.
            #[test]
            fn country_is_union_of_its_cities(
                coords in prop::collection::vec(0usize..CITIES.len(), 1..6),
                users in prop::collection::vec((any::<Index>(), prop::option::of(any::<Index>())), 0..40),
            ) {
                let (w, _) = seed(&coords, &users);
                let lyon = as_map(&w.engine.statistics_by_city("Lyon").unwrap());
                let paris = as_map(&w.engine.statistics_by_city("Paris").unwrap());
                let france = as_map(&w.engine.statistics_by_country("France").unwrap());
                prop_assert_eq!(france, merge(lyon, paris));
            }

            /// Property: one record per party name, each with a positive count.
            #[test]
            fn records_are_distinct_and_positive(
                coords in prop::collection::vec(0usize..CITIES.len(), 1..6),
                users in prop::collection::vec((any::<Index>(), prop::option::of(any::<Index>())), 0..40),
            ) {
                let (w, _) = seed(&coords, &users);
                let stats = w.engine.statistics_by_country("France").unwrap();
                let names: HashSet<&str> = stats.iter().map(|r| r.party_name.as_str()).collect();
                prop_assert_eq!(names.len(), stats.len());
                prop_assert!(stats.iter().all(|r| r.member_count > 0));
            }
        }
    }
}
