/// Fixed-capacity LIFO. The backing `Vec` is allocated once at construction
/// and never grows past `capacity`.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Appends `item` as the new top. A full stack rejects the item and hands
    /// it back unchanged.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Top to bottom, non-mutating.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod test {
    use super::BoundedStack;

    #[test]
    fn test_push_pop_order() {
        let mut stack = BoundedStack::new(3);
        assert!(stack.is_empty());
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert_eq!(stack.peek(), Some(&20));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_full_push_rejected() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(3), Err(3));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.iter_top_down().copied().collect::<Vec<_>>(), [2, 1]);
    }

    #[test]
    fn test_pop_empty_no_mutation() {
        let mut stack: BoundedStack<i32> = BoundedStack::new(2);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_full());
        assert!(stack.is_empty());
        assert_eq!(stack.push(1), Err(1));
    }
}
