use crate::application::similar::SimilarBooksUseCase;
use crate::domain::entities::book::Recommendation;
use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::interaction_log::InteractionLog;
use crate::domain::ports::seed_shuffler::SeedShuffler;
use crate::domain::values::action::Action;
use std::collections::HashSet;
use std::sync::Arc;

pub const DEFAULT_PERSONAL_COUNT: usize = 15;

/// Blends a user's liked and searched titles into one recommendation list.
pub struct PersonalizedUseCase {
    log: Arc<dyn InteractionLog>,
    similar: Arc<SimilarBooksUseCase>,
    shuffler: Arc<dyn SeedShuffler>,
}

impl PersonalizedUseCase {
    pub fn new(
        log: Arc<dyn InteractionLog>,
        similar: Arc<SimilarBooksUseCase>,
        shuffler: Arc<dyn SeedShuffler>,
    ) -> Self {
        Self { log, similar, shuffler }
    }

    pub fn execute(&self, user_id: &str, count: usize) -> Result<Vec<Recommendation>, DomainError> {
        let history = self.log.read_by_user(user_id)?;
        let mut seeds = seed_titles(&history);
        if seeds.is_empty() || count == 0 {
            return Ok(vec![]);
        }
        self.shuffler.shuffle(&mut seeds);
        tracing::debug!(user = user_id, seeds = seeds.len(), "building personal recommendations");

        let seed_set: HashSet<&str> = seeds.iter().map(String::as_str).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut picked = Vec::new();

        for seed in &seeds {
            if !self.similar.knows(seed) {
                continue;
            }
            for rec in self.similar.execute(seed, count)? {
                if seed_set.contains(rec.title.as_str()) || seen.contains(&rec.title) {
                    continue;
                }
                seen.insert(rec.title.clone());
                picked.push(rec);
                if picked.len() >= count {
                    return Ok(picked);
                }
            }
        }
        Ok(picked)
    }
}

/// Liked titles then searched titles, each in first-seen order, without repeats.
pub fn seed_titles(history: &[InteractionEvent]) -> Vec<String> {
    let liked = history.iter().filter(|e| e.action == Action::Liked);
    let searched = history.iter().filter(|e| e.action == Action::Searched);

    let mut seen = HashSet::new();
    liked
        .chain(searched)
        .filter(|e| seen.insert(e.book_title.as_str()))
        .map(|e| e.book_title.clone())
        .collect()
}
