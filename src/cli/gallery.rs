//! Example review gallery

use rand::seq::SliceRandom;

/// Cycles through a fixed list of example reviews
#[derive(Clone, Debug)]
pub struct Gallery {
    examples: Vec<String>,
    cursor: Option<usize>,
}

impl Gallery {
    pub fn new(examples: Vec<String>) -> Self {
        Gallery {
            examples,
            cursor: None,
        }
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// 1-based lookup, matching the numbers shown on screen
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.examples.get(idx))
            .map(String::as_str)
    }

    /// Advance to the next example, wrapping around
    pub fn next_example(&mut self) -> Option<&str> {
        if self.examples.is_empty() {
            return None;
        }
        let idx = self.cursor.map_or(0, |c| (c + 1) % self.examples.len());
        self.cursor = Some(idx);
        Some(&self.examples[idx])
    }

    pub fn random_example(&mut self) -> Option<&str> {
        let mut rng = rand::thread_rng();
        let indices: Vec<usize> = (0..self.examples.len()).collect();
        let idx = *indices.choose(&mut rng)?;
        self.cursor = Some(idx);
        Some(&self.examples[idx])
    }

    /// Currently selected example, if any
    pub fn current(&self) -> Option<usize> {
        self.cursor
    }
}
