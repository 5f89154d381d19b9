use alloy::{requires, PreconditionError};

#[derive(Debug, PartialEq)]
enum StackError {
    Precondition(PreconditionError),
}

impl From<PreconditionError> for StackError {
    fn from(err: PreconditionError) -> Self {
        StackError::Precondition(err)
    }
}

struct Stack {
    items: Vec<i32>,
    frozen: bool,
}

impl Stack {
    #[requires(state(!self.frozen, "stack is frozen"))]
    fn push(&mut self, item: i32) -> Result<(), StackError> {
        self.items.push(item);

        Ok(())
    }

    #[requires(argument(depth < self.items.len(), "depth {} too large", depth))]
    fn peek(&self, depth: usize) -> Result<i32, StackError> {
        Ok(self.items[self.items.len() - 1 - depth])
    }
}

fn main() {
    let mut stack = Stack {
        items: Vec::new(),
        frozen: false,
    };

    stack.push(1).unwrap();
    stack.push(2).unwrap();
    assert_eq!(stack.peek(1), Ok(1));
    assert_eq!(
        stack.peek(2),
        Err(StackError::Precondition(PreconditionError::argument(
            "depth 2 too large"
        )))
    );

    stack.frozen = true;
    assert_eq!(
        stack.push(3),
        Err(StackError::Precondition(PreconditionError::state(
            "stack is frozen"
        )))
    );
}
