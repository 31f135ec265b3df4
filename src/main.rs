//! Runs the three pattern demos in sequence and prints what each one does.
//! Command-line arguments are ignored.

use behavioral_patterns::chain::{Handler, HandlerA, HandlerB, Outcome};
use behavioral_patterns::iterator::{Collection, Cursor};
use behavioral_patterns::strategy::{Context, StrategyA, StrategyB};
use colored::Colorize;

fn main() {
    strategy_demo();
    chain_demo();
    iterator_demo();
}

fn strategy_demo() {
    println!("{}", "=== Strategy ===".bold());

    let mut context = Context::new(Box::new(StrategyA));
    println!("{}", context.execute_strategy());

    context.set_strategy(Box::new(StrategyB));
    println!("{}", context.execute_strategy());

    // Any closure returning a String is a strategy too.
    context.set_strategy(Box::new(|| String::from("Executing a closure strategy.")));
    println!("{}", context.execute_strategy());
    println!();
}

fn chain_demo() {
    println!("{}", "=== Chain of Responsibility ===".bold());

    let handler_b = HandlerB::new();
    let mut handler_a = HandlerA::new();
    handler_a.set_next(Some(&handler_b));

    for request in ["A", "B", "C"] {
        println!("Sending request '{request}':");
        report(handler_a.handle(request));
    }
    println!();
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Handled(name) => println!("  {} processed the request.", name.green()),
        Outcome::Unhandled => println!("  {}", "No handler for this request.".yellow()),
    }
}

fn iterator_demo() {
    println!("{}", "=== Iterator ===".bold());

    let mut collection = Collection::new();
    collection.add("Первый");
    collection.add("Второй");
    collection.add("Третий");

    let mut cursor = collection.iter();
    if let Err(err) = cursor.current() {
        println!("{} {err}", "cursor error:".red());
    }

    println!("Walking with the cursor:");
    while cursor.move_next() {
        if let Ok(item) = cursor.current() {
            println!("  {item}");
        }
    }

    cursor.reset();
    if cursor.move_next() {
        if let Ok(item) = cursor.current() {
            println!("After reset the walk restarts at: {item}");
        }
    }

    println!("Walking with a for loop:");
    for item in &collection {
        println!("  {}", item.blue());
    }
}
