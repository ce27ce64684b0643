use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    fn alloc(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, prev, next })))
    }
}

/// Doubly linked list where every element lives in its own heap node.
///
/// Only the operations the benchmarks need are provided: appending, walking
/// to a position, iterating, and inserting through a retained [`CursorMut`].
pub struct NodeList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> NodeList<T> {
    pub fn new() -> NodeList<T> {
        NodeList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    pub fn push_back(&mut self, value: T) {
        let node = Node::alloc(value, self.tail, None);
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, None, self.head);
        match self.head {
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| {
            let boxed = unsafe { Box::from_raw(node.as_ptr()) };
            self.head = boxed.next;
            match self.head {
                Some(head) => unsafe { (*head.as_ptr()).prev = None },
                None => self.tail = None,
            }
            self.len -= 1;
            boxed.value
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns the element at `index` by walking forward from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Cursor on the head, or on the ghost position when the list is empty.
    pub fn cursor_front(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            index: 0,
            current: self.head,
            list: self,
        }
    }

    /// Walks to `index` once and returns a cursor parked on that node.
    ///
    /// `index == len` parks the cursor on the ghost position past the tail.
    pub fn cursor_at(&mut self, index: usize) -> Option<CursorMut<'_, T>> {
        if index > self.len {
            return None;
        }
        let current = self.node_at(index);
        Some(CursorMut {
            index,
            current,
            list: self,
        })
    }

    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }
        let mut node = self.head;
        for _ in 0..index {
            node = node.and_then(|n| unsafe { (*n.as_ptr()).next });
        }
        node
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        NodeList::new()
    }
}

impl<T> Drop for NodeList<T> {
    fn drop(&mut self) {
        // iterative so long lists can't blow the stack
        while self.pop_front().is_some() {}
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = NodeList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for NodeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for NodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for NodeList<T> {}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A retained position inside a [`NodeList`].
///
/// Inserting through the cursor never re-walks the list, so repeated
/// insertions at the same spot cost O(1) each.
pub struct CursorMut<'a, T> {
    index: usize,
    current: Link<T>,
    list: &'a mut NodeList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// `None` when parked on the ghost position.
    pub fn current(&mut self) -> Option<&mut T> {
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Steps forward. Moving past the ghost wraps around to the head.
    pub fn move_next(&mut self) {
        match self.current {
            Some(node) => {
                self.current = unsafe { (*node.as_ptr()).next };
                self.index += 1;
            }
            None => {
                self.current = self.list.head;
                self.index = 0;
            }
        }
    }

    /// Links `value` in front of the current node. The cursor stays on the
    /// same node, whose index grows by one.
    pub fn insert_before(&mut self, value: T) {
        let Some(current) = self.current else {
            self.list.push_back(value);
            self.index += 1;
            return;
        };

        unsafe {
            let prev = (*current.as_ptr()).prev;
            let node = Node::alloc(value, prev, Some(current));
            (*current.as_ptr()).prev = Some(node);
            match prev {
                Some(prev) => (*prev.as_ptr()).next = Some(node),
                None => self.list.head = Some(node),
            }
        }
        self.list.len += 1;
        self.index += 1;
    }
}
