#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tsg_ir::StringInterner;
use tsg_parse::{parse_str, ParseOptions};

use crate::print_source_file;

fn print_with(source: &str, options: ParseOptions) -> String {
    let interner = StringInterner::new();
    let result = parse_str(source, &interner, options);
    assert!(
        !result.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        result.errors
    );
    print_source_file(&result.file, &interner)
}

fn print(source: &str) -> String {
    print_with(source, ParseOptions::default())
}

#[test]
fn variable_statement_spacing() {
    assert_eq!(print("let a=1,b:string"), "let a = 1, b: string;\n");
}

#[test]
fn empty_file_prints_nothing() {
    assert_eq!(print(""), "");
}

#[test]
fn blocks_indent_by_level() {
    assert_eq!(
        print("function f(a: number): void { if (a) { return; } else g(); }"),
        "function f(a: number): void {\n    if (a) {\n        return;\n    } else g();\n}\n"
    );
}

#[test]
fn parentheses_come_from_the_tree() {
    assert_eq!(print("x = (a + b) * c"), "x = (a + b) * c;\n");
    assert_eq!(print("x = a + b * c"), "x = a + b * c;\n");
}

#[test]
fn unary_signs_stay_separate() {
    assert_eq!(
        print("a = - -b; c = typeof d; e = -(-f); g = + ++h; i = !j"),
        "a = - -b;\nc = typeof d;\ne = -(-f);\ng = + ++h;\ni = !j;\n"
    );
}

#[test]
fn member_access_on_an_integer_literal() {
    assert_eq!(print("1 .toString()"), "1 .toString();\n");
    assert_eq!(print("1.5.toFixed()"), "1.5.toFixed();\n");
}

#[test]
fn trailing_holes_keep_their_comma() {
    assert_eq!(print("x = [a, ,]"), "x = [a, ,];\n");
    assert_eq!(print("x = [,]"), "x = [,];\n");
    assert_eq!(print("[a, , b] = c"), "[a, , b] = c;\n");
    assert_eq!(print("x = [a,]"), "x = [a];\n");
}

#[test]
fn templates_keep_raw_text() {
    assert_eq!(print("tag`a${b}c${ d }e`"), "tag`a${b}c${d}e`;\n");
}

#[test]
fn arrows_always_parenthesize_parameters() {
    assert_eq!(
        print("f = x => x; g = <T>(y: T): T => { return y; }"),
        "f = (x) => x;\ng = <T>(y: T): T => {\n    return y;\n};\n"
    );
}

#[test]
fn control_flow_statements() {
    let source = "for (var i = 0; i < n; i++) {}\n\
                  for (;;) break;\n\
                  for (k in o) continue;\n\
                  for (const v of list) ;\n\
                  do x(); while (y)\n\
                  outer: while (true) {}\n\
                  with (o) x;\n\
                  debugger";
    assert_eq!(
        print(source),
        "for (var i = 0; i < n; i++) {}\n\
         for (;;) break;\n\
         for (k in o) continue;\n\
         for (const v of list) ;\n\
         do x(); while (y);\n\
         outer: while (true) {}\n\
         with (o) x;\n\
         debugger;\n"
    );
}

#[test]
fn switch_cases_indent_their_bodies() {
    assert_eq!(
        print("switch (x) { case 1: case 2: a(); break; default: b(); }"),
        "switch (x) {\n    case 1:\n    case 2:\n        a();\n        break;\n    default:\n        b();\n}\n"
    );
}

#[test]
fn try_statement() {
    assert_eq!(
        print("try { a(); } catch ({ message }) {} finally { b(); }"),
        "try {\n    a();\n} catch ({ message }) {} finally {\n    b();\n}\n"
    );
}

#[test]
fn class_members() {
    let source = "class A<T> extends B<T> implements C { private static x: number = 1; \
                  constructor(public y) {} *gen() {} get v(): T { return this.y; } \
                  [k: string]: any; }";
    assert_eq!(
        print(source),
        "class A<T> extends B<T> implements C {\n    \
         private static x: number = 1;\n    \
         constructor(public y) {}\n    \
         *gen() {}\n    \
         get v(): T {\n        \
         return this.y;\n    \
         }\n    \
         [k: string]: any;\n\
         }\n"
    );
}

#[test]
fn interface_members_end_with_semicolons() {
    assert_eq!(
        print("interface I extends J { a?: number, m<T>(x: T): void\n (): I; new (): I; [k: number]: string }"),
        "interface I extends J {\n    a?: number;\n    m<T>(x: T): void;\n    (): I;\n    new (): I;\n    [k: number]: string;\n}\n"
    );
}

#[test]
fn type_aliases() {
    assert_eq!(
        print("type F = (a: string, b?: number) => A | B[];"),
        "type F = (a: string, b?: number) => A | B[];\n"
    );
    assert_eq!(
        print("type O = {a: number, b(): void};"),
        "type O = { a: number; b(): void };\n"
    );
    assert_eq!(
        print("type Q = typeof a.b & (new () => X) & [1, \"s\", true];"),
        "type Q = typeof a.b & (new () => X) & [1, \"s\", true];\n"
    );
}

#[test]
fn enums_and_namespaces() {
    assert_eq!(
        print("const enum E { A, B = 1 << 2 }\nmodule M.N { export enum F {} }"),
        "const enum E { A, B = 1 << 2 }\nnamespace M.N {\n    export enum F {}\n}\n"
    );
}

#[test]
fn module_items() {
    let source = "import a from \"a\";\n\
                  import * as ns from 'b';\n\
                  import d, { e, f as g } from \"d\";\n\
                  import \"side\";\n\
                  export { a as b } from \"m\";\n\
                  export * from \"m\";\n\
                  export default class {}\n\
                  export default x + 1;";
    assert_eq!(
        print_with(source, ParseOptions::module()),
        "import a from \"a\";\n\
         import * as ns from 'b';\n\
         import d, { e, f as g } from \"d\";\n\
         import \"side\";\n\
         export { a as b } from \"m\";\n\
         export * from \"m\";\n\
         export default class {}\n\
         export default x + 1;\n"
    );
}

#[test]
fn import_equals_forms() {
    assert_eq!(
        print("import fs = require(\"fs\"); import Alias = A.B.C"),
        "import fs = require(\"fs\");\nimport Alias = A.B.C;\n"
    );
}

#[test]
fn ambient_declarations() {
    let source = "declare var a: number, b;\n\
                  declare function f<T>(x: T): T;\n\
                  declare class C { constructor(x: number); m(): void; }\n\
                  declare module \"m\" { export function g(): void; }\n\
                  declare namespace N { export var v: string; }";
    assert_eq!(
        print(source),
        "declare var a: number, b;\n\
         declare function f<T>(x: T): T;\n\
         declare class C {\n    \
         constructor(x: number);\n    \
         m(): void;\n\
         }\n\
         declare module \"m\" {\n    \
         export declare function g(): void;\n\
         }\n\
         declare namespace N {\n    \
         export var v: string;\n\
         }\n"
    );
}

#[test]
fn declaration_source_prints_explicit_declare() {
    assert_eq!(
        print_with(
            "function f(): void;\ninterface I {}",
            ParseOptions::declaration()
        ),
        "declare function f(): void;\ninterface I {}\n"
    );
}

#[test]
fn abandoned_statements_are_dropped() {
    let interner = StringInterner::new();
    let result = parse_str("let x = ;\nf();", &interner, ParseOptions::default());
    assert!(result.has_errors());
    assert_eq!(print_source_file(&result.file, &interner), "f();\n");
}
