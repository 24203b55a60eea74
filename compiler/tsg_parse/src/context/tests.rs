use super::*;

#[test]
fn default_is_empty() {
    let ctx = ParseContext::default();
    assert_eq!(ctx, ParseContext::NONE);
    assert!(ctx.allows_in());
    assert!(!ctx.in_generator());
    assert!(!ctx.in_ambient());
    assert!(!ctx.in_cover());
    assert!(!ctx.in_namespace());
}

#[test]
fn with_and_without() {
    let ctx = ParseContext::NONE
        .with(ParseContext::NO_IN)
        .with(ParseContext::IN_GENERATOR);
    assert!(!ctx.allows_in());
    assert!(ctx.in_generator());

    let ctx = ctx.without(ParseContext::NO_IN);
    assert!(ctx.allows_in());
    assert!(ctx.in_generator());
}

#[test]
fn flags_are_distinct() {
    let all = [
        ParseContext::IN_GENERATOR,
        ParseContext::NO_IN,
        ParseContext::IN_AMBIENT,
        ParseContext::IN_COVER,
        ParseContext::IN_NAMESPACE,
    ];
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(a.has(*b), i == j);
        }
    }
}
