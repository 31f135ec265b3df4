//! Chain of Responsibility: a linked sequence of handlers where each node
//! either processes a request or passes it to the next node.
//!
//! Links are non-owning `&dyn Handler` borrows, so a chain is built from
//! plain stack locals and the borrow checker guarantees every link outlives
//! the node that holds it. Keeping a chain acyclic is the builder's job.

/// What became of a dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named handler recognized the request and processed it.
    Handled(&'static str),
    /// The request traversed the chain without finding a handler.
    Unhandled,
}

/// A node in the chain. Each concrete handler recognizes exactly one request
/// token; anything else takes the shared fall-through path in `forward`.
pub trait Handler {
    /// Attempts to handle the request, forwarding it when it does not match.
    fn handle(&self, request: &str) -> Outcome;

    /// The node's forwarding target, if any.
    fn next(&self) -> Option<&dyn Handler>;

    /// Fall-through behavior shared by every node: delegate to the next
    /// handler if one is set, otherwise report that nobody took the request.
    fn forward(&self, request: &str) -> Outcome {
        match self.next() {
            Some(next) => next.handle(request),
            None => Outcome::Unhandled,
        }
    }
}

/// Handles requests carrying the token `"A"`.
pub struct HandlerA<'a> {
    next: Option<&'a dyn Handler>,
}

impl<'a> HandlerA<'a> {
    pub fn new() -> Self {
        HandlerA { next: None }
    }

    /// Sets the forwarding target, overwriting any previous one. `None`
    /// terminates the chain at this node.
    pub fn set_next(&mut self, next: Option<&'a dyn Handler>) {
        self.next = next;
    }
}

impl Handler for HandlerA<'_> {
    fn handle(&self, request: &str) -> Outcome {
        if request == "A" {
            Outcome::Handled("Handler A")
        } else {
            self.forward(request)
        }
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next
    }
}

/// Handles requests carrying the token `"B"`.
pub struct HandlerB<'a> {
    next: Option<&'a dyn Handler>,
}

impl<'a> HandlerB<'a> {
    pub fn new() -> Self {
        HandlerB { next: None }
    }

    /// Sets the forwarding target, overwriting any previous one. `None`
    /// terminates the chain at this node.
    pub fn set_next(&mut self, next: Option<&'a dyn Handler>) {
        self.next = next;
    }
}

impl Handler for HandlerB<'_> {
    fn handle(&self, request: &str) -> Outcome {
        if request == "B" {
            Outcome::Handled("Handler B")
        } else {
            self.forward(request)
        }
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next
    }
}
