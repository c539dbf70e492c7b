/// Image index of a single project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` images; zero is treated as one.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.len
    }

    pub fn is_single(&self) -> bool {
        self.len == 1
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }
}
