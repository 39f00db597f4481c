use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/800/500";

/// Fallback asset for an image that failed to load.
pub fn placeholder_image(width: u32, height: u32) -> String {
    format!("/api/placeholder/{width}/{height}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

/// Circular position over a room gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Resumes at `active`, which restarts from 0 when it is out of range.
    pub fn at(len: usize, active: usize) -> Self {
        let active = if active < len { active } else { 0 };
        Self { len, active }
    }

    pub fn step(&mut self, direction: Direction) -> usize {
        match direction {
            Direction::Next => self.next(),
            Direction::Prev => self.prev(),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 1 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 1 {
            self.active = (self.active + self.len - 1) % self.len;
        }
        self.active
    }

    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.active = 0;
    }
}
