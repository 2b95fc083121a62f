use indexmap::{map::Values, IndexMap};

use roster_shared::{PlayerId, PlayerRecord};

/// Every player currently known, keyed by UUID, in order of first observation.
///
/// The roster is the only owner of [`PlayerRecord`]s. Outside the crate it is
/// read-only; the tracker's packet handlers are its only mutators.
#[derive(Debug, Default)]
pub struct Roster {
    players: IndexMap<PlayerId, PlayerRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            players: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            players: IndexMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, uuid: &str) -> Option<&PlayerRecord> {
        self.players.get(uuid)
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.players.contains_key(uuid)
    }

    /// Lazy view over the current players. Call again to restart.
    pub fn iter(&self) -> Players<'_> {
        Players {
            inner: self.players.values(),
        }
    }

    /// The current players, collected.
    pub fn to_vec(&self) -> Vec<&PlayerRecord> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Looks up the record for `uuid`, creating an empty one if it is unknown,
    /// and applies `mutation` to it in place.
    pub(crate) fn upsert<F>(&mut self, uuid: &PlayerId, mutation: F) -> &PlayerRecord
    where
        F: FnOnce(&mut PlayerRecord),
    {
        let player = self
            .players
            .entry(uuid.clone())
            .or_insert_with(|| PlayerRecord::new(uuid.clone()));
        mutation(&mut *player);
        player
    }

    /// Drops the record for `uuid`. Unknown ids are ignored.
    pub(crate) fn remove(&mut self, uuid: &str) -> Option<PlayerRecord> {
        self.players.shift_remove(uuid)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PlayerRecord;
    type IntoIter = Players<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the players of a [`Roster`]
#[derive(Clone)]
pub struct Players<'a> {
    inner: Values<'a, PlayerId, PlayerRecord>,
}

impl<'a> Iterator for Players<'a> {
    type Item = &'a PlayerRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Players<'_> {}
