//! Strategy: a family of interchangeable behaviors selected at runtime by a
//! context object that owns exactly one of them and delegates execution.

/// A single swappable behavior. Executing it returns the identifying text of
/// whatever ran; the caller decides what to do with it (the demo prints it).
pub trait Strategy {
    fn execute(&self) -> String;
}

pub struct StrategyA;

impl Strategy for StrategyA {
    fn execute(&self) -> String {
        "Executing strategy A.".to_string()
    }
}

pub struct StrategyB;

impl Strategy for StrategyB {
    fn execute(&self) -> String {
        "Executing strategy B.".to_string()
    }
}

// Closures are strategies too: any `Fn() -> String` can be boxed and handed
// to a Context without declaring a named type.
impl<F: Fn() -> String> Strategy for F {
    fn execute(&self) -> String {
        self()
    }
}

/// Holds the currently selected strategy. The field is not optional, so a
/// context can never exist without a valid strategy.
pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Context { strategy }
    }

    /// Replaces the held strategy; takes effect for every later
    /// `execute_strategy` call. Last write wins.
    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    /// Delegates to the held strategy; no behavior of its own.
    pub fn execute_strategy(&self) -> String {
        self.strategy.execute()
    }
}

#[cfg(test)]
mod tests {
    // Explicit imports: proptest's prelude exports its own `Strategy`, so a
    // glob of `super` here would leave the trait name ambiguous.
    use super::{Context, Strategy, StrategyA, StrategyB};
    use proptest::prelude::*;

    #[test]
    fn test_strategies_identify_themselves() {
        assert_eq!(StrategyA.execute(), "Executing strategy A.");
        assert_eq!(StrategyB.execute(), "Executing strategy B.");
    }

    #[test]
    fn test_context_delegates_to_initial_strategy() {
        let context = Context::new(Box::new(StrategyA));
        assert_eq!(context.execute_strategy(), StrategyA.execute());
    }

    #[test]
    fn test_set_strategy_replaces_behavior() {
        let mut context = Context::new(Box::new(StrategyA));
        context.set_strategy(Box::new(StrategyB));
        assert_eq!(context.execute_strategy(), StrategyB.execute());
    }

    #[test]
    fn test_last_write_wins() {
        let mut context = Context::new(Box::new(StrategyA));
        context.set_strategy(Box::new(StrategyB));
        context.set_strategy(Box::new(StrategyA));
        assert_eq!(context.execute_strategy(), StrategyA.execute());
    }

    #[test]
    fn test_closure_as_strategy() {
        let mut context = Context::new(Box::new(StrategyA));
        context.set_strategy(Box::new(|| "Executing a closure.".to_string()));
        assert_eq!(context.execute_strategy(), "Executing a closure.");
    }

    #[test]
    fn test_repeated_execution_is_stable() {
        let context = Context::new(Box::new(StrategyB));
        assert_eq!(context.execute_strategy(), "Executing strategy B.");
        assert_eq!(context.execute_strategy(), "Executing strategy B.");
    }

    #[test]
    fn test_strategy_is_usable_through_a_trait_object() {
        let strategy: &dyn Strategy = &StrategyB;
        assert_eq!(strategy.execute(), "Executing strategy B.");
    }

    proptest! {
        // Whatever the history of swaps, execution matches the last one set.
        #[test]
        fn test_execute_matches_most_recent_set(picks: Vec<bool>) {
            let mut context = Context::new(Box::new(StrategyA));
            let mut expected = StrategyA.execute();
            for pick_b in picks {
                if pick_b {
                    context.set_strategy(Box::new(StrategyB));
                    expected = StrategyB.execute();
                } else {
                    context.set_strategy(Box::new(StrategyA));
                    expected = StrategyA.execute();
                }
            }
            prop_assert_eq!(context.execute_strategy(), expected);
        }
    }
}
