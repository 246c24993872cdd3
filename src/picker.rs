use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ResponderError;

/// Picks one default response uniformly at random.
///
/// The random source is owned and lock-guarded, so a picker shared between
/// threads draws from a single sequence.
#[derive(Debug)]
pub struct DefaultPicker<R = StdRng> {
    rng: Mutex<R>,
}

impl DefaultPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> DefaultPicker<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn pick<'a>(&self, responses: &'a [String]) -> Result<&'a str, ResponderError> {
        let mut rng = self.rng.lock();
        responses
            .choose(&mut *rng)
            .map(String::as_str)
            .ok_or(ResponderError::EmptyDefaultList)
    }
}
