//! Round-trip verification over a corpus of hand-written sources.
//!
//! For every source:
//! 1. the printed text parses without errors,
//! 2. it parses to a tree of the same shape as the original,
//! 3. printing is idempotent: print(parse(print(x))) == print(x).

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_fmt::print_source_file;
use tsg_ir::syntax::SyntaxNode;
use tsg_ir::StringInterner;
use tsg_parse::{parse_str, ParseOptions};

/// Parse and print, returning the parse errors on failure.
fn parse_and_print(source: &str, options: ParseOptions) -> Result<(String, String), String> {
    let interner = StringInterner::new();
    let result = parse_str(source, &interner, options);
    if result.has_errors() {
        return Err(format!("{:?}", result.errors));
    }
    let shape = SyntaxNode::lower(&result.file, &interner).shape();
    Ok((print_source_file(&result.file, &interner), shape))
}

fn assert_round_trip(source: &str, options: ParseOptions) {
    let (printed, shape) = parse_and_print(source, options)
        .unwrap_or_else(|errors| panic!("source did not parse: {errors}\n{source}"));
    let (reprinted, reshape) = parse_and_print(&printed, options)
        .unwrap_or_else(|errors| panic!("printed output did not parse: {errors}\n{printed}"));
    assert_eq!(shape, reshape, "shape changed for:\n{source}\nprinted as:\n{printed}");
    assert_eq!(printed, reprinted, "printing is not idempotent for:\n{source}");
}

const EXPRESSIONS: &[&str] = &[
    "a = b ? c : d ? e : f;",
    "x = a || b && c | d ^ e & f == g < h << i + j * k;",
    "x = (a, b), c;",
    "x = a >>> b >> c; y >>>= 2; z >>= 1; w >= v;",
    "x = f<T>(a); y = a < b > c;",
    "x = <T>y; z = y as T as U;",
    "x = new a.b.C<T>(1)(2); y = new Foo; z = new (f())();",
    "x = a[b].c(d)[e]; y = 1 .toString(); z = 0.5.toFixed(1);",
    "x = -(-a); y = - -a; z = + +a; w = - --a; v = !~a; u = typeof void delete a.b;",
    "x = a++ + ++b - c-- - --d;",
    "x = [, a, , ...b, ,]; y = [,]; z = [];",
    "x = { a, b: 1, 'c': 2, 3: d, get e() { return 1; }, set e(v) {}, f() {}, *g() {} };",
    "({ a = 1, b: [c] } = x);",
    "[a, [b, ...c], { d }] = e;",
    "x = `plain`; y = `a${b}c${d + e}f`; z = tag`t${u}`;",
    "x = /ab+c/gi.test(s); y = a / b / c;",
    "f = (a, b?: number, ...c: string[]): void => { return; };",
    "g = x => y => x + y; h = () => ({}); k = <T>(t: T) => t;",
    "n = (function named() {}); o = (class extends B {});",
    "function* gen() { yield; yield a; yield* b; x = yield; }",
];

const STATEMENTS: &[&str] = &[
    "var a, b = 1; let [c, , d = 2] = e; const { f, g: h = 3 } = j;",
    "if (a) b(); else if (c) d(); else { e(); }",
    "for (var i = 0, n = a.length; i < n; i++) {}\nfor (;;) break;\nfor (x of y) continue;",
    "for (const [k, v] of entries) { use(k, v); }\nfor (var key in obj) ;\nfor (a.b in obj) {}",
    "for (var i = (a in b); i; ) {}",
    "while (a) b();\ndo c(); while (d)\nlabel: for (;;) { break label; }",
    "switch (x) { case 1: case 2: a(); break; default: b(); }\nswitch (y) {}",
    "try { a(); } catch (e) {}\ntry {} finally {}\ntry {} catch ({ message }) {} finally { b(); }",
    "with (o) { x; }\ndebugger;\n;\n{}",
    "function f() { return\n1; }",
    "throw new Error(`bad ${thing}`);",
    "a\n++b",
];

const DECLARATIONS: &[&str] = &[
    "function f<T extends object, U>(a: T, b?: U, ...rest: any[]): T | U { return a; }",
    "function over(a: string): void;\nfunction over(a: number): void;\nfunction over(a) {}",
    "class A<T> extends B<T> implements C, D.E {\n  private static x: number = 1;\n  y?: string;\n  \
     constructor(public a, private b: number) { super(); }\n  \
     m?(): void;\n  *gen() {}\n  get v(): T { return this.a; }\n  set v(value: T) {}\n  \
     [key: string]: any;\n  static() {}\n}",
    "interface I<T> extends J, K<T> {\n  a: number;\n  b?: string\n  c(x: T): void,\n  \
     (): I<T>; new (n: number): I<T>; [i: number]: T;\n}",
    "type Fn = <T>(a: T, b: (c: number) => void) => new () => T;",
    "type U = string | number[] | (A & B)[] | [A, B] | typeof a.b | { x: 1; y: 'two'; z: true } | this;",
    "enum E { A, B = 1 << 2, 'c' = B | A }\nconst enum F {}",
    "namespace A.B.C { export var x = 1; function hidden() {} }\nmodule M { }",
    "import fs = require(\"fs\");\nimport Alias = A.B.C;",
    "declare var a: number, b;\ndeclare let c: string;\ndeclare const d: boolean;",
    "declare function f<T>(x: T): T;\ndeclare enum E { A }\ndeclare const enum F { B = 2 }",
    "declare class C<T> extends D implements I {\n  constructor(x: number);\n  private p?: T;\n  \
     static m(): void;\n  [k: string]: any;\n}",
    "declare namespace N.O {\n  export var v: string;\n  function g(): void;\n  \
     interface J {}\n  type K = J;\n  import L = N.O.J;\n  namespace Deep {}\n}",
    "declare module \"m\" {\n  export function g(): void;\n  export default class K {}\n}",
    "declare interface Loose {}\ndeclare type T = number;",
];

const MODULES: &[&str] = &[
    "import a from \"a\";\nimport * as ns from \"b\";\nimport { x, y as z, } from \"c\";\n\
     import d, { e } from \"d\";\nimport \"side-effect\";",
    "export var a = 1;\nexport function f() {}\nexport default class {}\nexport * from \"m\";\n\
     export { a as b, f as default };\nexport interface I {}\nexport = a;",
    "export default function () {}\nexport default x + 1;\nexport {};\nexport { q } from 'r';",
];

const DECLARATION_SOURCES: &[&str] = &[
    "function f(): void;\nclass C { m(): void; }\nvar v: number;\ninterface I {}\n\
     export namespace N { function g(): void; }\nenum E { A }",
    "export default function h(): void;",
    "export default class D { x: number; }",
];

#[test]
fn expression_round_trips() {
    for source in EXPRESSIONS {
        assert_round_trip(source, ParseOptions::default());
    }
}

#[test]
fn statement_round_trips() {
    for source in STATEMENTS {
        assert_round_trip(source, ParseOptions::default());
    }
}

#[test]
fn declaration_round_trips() {
    for source in DECLARATIONS {
        assert_round_trip(source, ParseOptions::default());
    }
}

#[test]
fn module_round_trips() {
    for source in MODULES {
        assert_round_trip(source, ParseOptions::module());
    }
}

#[test]
fn declaration_source_round_trips() {
    for source in DECLARATION_SOURCES {
        assert_round_trip(source, ParseOptions::declaration());
    }
}

#[test]
fn line_breaks_that_end_statements_are_made_explicit() {
    let (printed, _) = parse_and_print("a\n++b\nreturn1 = 2", ParseOptions::default()).unwrap();
    assert_eq!(printed, "a;\n++b;\nreturn1 = 2;\n");
}
