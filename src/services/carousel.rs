/// Rotation state shared by the hero carousel and the smaller sliders.
///
/// Timers live with the caller (the page's htmx trigger, or a test loop);
/// this type only answers "what is the active slide after one tick". That
/// keeps the rotation deterministic: N ticks over N slides is a full cycle,
/// and a paused carousel never advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            paused: false,
        }
    }

    pub fn with_active(len: usize, active: usize) -> Self {
        Self {
            len,
            active: if len == 0 { 0 } else { active % len },
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// One autoplay interval elapsing.
    pub fn tick(&mut self) {
        if self.paused || self.len < 2 {
            return;
        }
        self.active = next_index(self.active, self.len);
    }

    /// Hover / interaction pause. Ticks are ignored until [`resume`].
    ///
    /// [`resume`]: Carousel::resume
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Manual dot/thumbnail selection. Autoplay holds afterwards until the
    /// caller resumes it (the pages do so on a delay).
    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.active = index % self.len;
        self.paused = true;
    }
}

fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}
