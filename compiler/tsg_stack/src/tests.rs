use super::*;

enum Nest {
    Leaf,
    Paren(Box<Nest>),
}

fn build(depth: usize) -> Nest {
    (0..depth).fold(Nest::Leaf, |inner, _| Nest::Paren(Box::new(inner)))
}

fn measure(nest: &Nest) -> usize {
    ensure_sufficient_stack(|| match nest {
        Nest::Leaf => 0,
        Nest::Paren(inner) => measure(inner) + 1,
    })
}

#[test]
fn shallow_walk() {
    assert_eq!(measure(&build(8)), 8);
}

#[test]
fn deep_walk_grows_the_stack() {
    let nest = build(200_000);
    assert_eq!(measure(&nest), 200_000);
    // Dropping a deep Box chain recurses too.
    ensure_sufficient_stack(|| {
        let mut cur = nest;
        while let Nest::Paren(inner) = cur {
            cur = *inner;
        }
    });
}

#[test]
fn passes_results_through() {
    let parsed: Result<u32, String> = ensure_sufficient_stack(|| "17".parse().map_err(|_| String::new()));
    assert_eq!(parsed, Ok(17));
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn remaining_stack_is_reported() {
    assert!(remaining_stack().is_some_and(|bytes| bytes > 0));
}
