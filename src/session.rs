//! Draw-without-replacement over a playlist's track list.

use std::collections::HashSet;

use rand::{Rng, rngs::ThreadRng};

use crate::error::{Error, Result};

/// A shuffle session over an immutable list of track references.
///
/// Each call to [`draw_next`](Self::draw_next) returns a uniformly chosen
/// reference that has not been drawn yet. Drawn indices are swap-removed from
/// a pool, so a draw costs O(1) regardless of how much of the list has been
/// played. References listed more than once are only ever returned once.
///
/// The default generator is [`rand::rng()`], a ChaCha-based CSPRNG seeded
/// from the operating system.
pub struct ShuffleSession<R: Rng = ThreadRng> {
    tracks: Vec<String>,
    pool: Vec<usize>,
    played: HashSet<String>,
    distinct: usize,
    rng: R,
}

impl ShuffleSession<ThreadRng> {
    pub fn new(tracks: Vec<String>) -> Self {
        Self::with_rng(tracks, rand::rng())
    }
}

impl<R: Rng> ShuffleSession<R> {
    pub fn with_rng(tracks: Vec<String>, rng: R) -> Self {
        let distinct = tracks.iter().collect::<HashSet<_>>().len();
        let pool = (0..tracks.len()).collect();

        Self {
            tracks,
            pool,
            played: HashSet::new(),
            distinct,
            rng,
        }
    }

    /// Draws a track that has not been played in this session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] once every distinct reference has been drawn.
    pub fn draw_next(&mut self) -> Result<&str> {
        while !self.pool.is_empty() {
            let slot = self.rng.random_range(0..self.pool.len());
            let index = self.pool.swap_remove(slot);

            // duplicates of an already played reference are dropped silently
            if self.played.insert(self.tracks[index].clone()) {
                return Ok(&self.tracks[index]);
            }
        }

        Err(Error::Empty)
    }

    /// Total number of entries in the track list, duplicates included.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    /// Distinct references still waiting to be drawn.
    pub fn remaining(&self) -> usize {
        self.distinct - self.played.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn has_played(&self, track: &str) -> bool {
        self.played.contains(track)
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }
}
