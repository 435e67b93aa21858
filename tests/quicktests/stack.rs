use arena_collections::stack::Stack;
use arena_collections::Mode;

use crate::Op;

quickcheck::quickcheck! {
    /// The stack agrees with `Vec` used as a stack under any mix of pushes
    /// and pops (`Remove` is treated as a pop here; keys are ignored).
    fn behaves_like_vec(ops: Vec<Op<i16>>) -> bool {
        let mut stack = Stack::new();
        let mut model = Vec::new();

        for op in &ops {
            match op {
                Op::Insert(k) => {
                    stack.push(*k);
                    model.push(*k);
                }
                Op::Remove(_) => {
                    if stack.pop() != model.pop() {
                        return false;
                    }
                }
            }
            if stack.len() != model.len() || stack.is_empty() != model.is_empty() {
                return false;
            }
        }
        true
    }
}

quickcheck::quickcheck! {
    fn search_finds_every_pushed_key(keys: Vec<i8>) -> bool {
        let mut stack = Stack::new();
        for key in &keys {
            stack.push(*key);
        }

        keys.iter().all(|k| {
            let hit = stack.search(k, Mode::Iterative);
            hit.is_some() && hit == stack.search(k, Mode::Recursive)
        })
    }
}

quickcheck::quickcheck! {
    fn drained_stack_is_empty(keys: Vec<i8>) -> bool {
        let mut stack = Stack::new();
        for key in &keys {
            stack.push(*key);
        }
        for _ in 0..keys.len() {
            if stack.pop().is_none() {
                return false;
            }
        }

        stack.is_empty()
            && stack.head().is_none()
            && stack.tail().is_none()
            && stack.pop().is_none()
    }
}
