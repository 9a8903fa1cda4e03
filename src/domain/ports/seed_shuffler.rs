/// Source of randomness for ordering a user's seed titles.
pub trait SeedShuffler: Send + Sync {
    fn shuffle(&self, titles: &mut [String]);
}
