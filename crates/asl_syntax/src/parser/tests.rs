#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover the emitted shape of each production in dense and pretty mode and the first-error behavior
/// on malformed input.
mod tests {
    use super::*;
    use crate::lexer;

    fn compile(source: &str) -> Result<String, ParseError> {
        let tokens = lexer::tokenize(source.as_bytes(), false);
        Parser::new(&tokens, EmitConfig::dense()).parse()
    }

    fn compile_pretty(source: &str) -> Result<String, ParseError> {
        let tokens = lexer::tokenize(source.as_bytes(), false);
        Parser::new(&tokens, EmitConfig::pretty()).parse()
    }

    fn compile_err(source: &str) -> ParseError {
        compile(source).expect_err("input should be rejected")
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(compile("").unwrap(), "");
        assert_eq!(compile("  // nothing\n").unwrap(), "");
    }

    #[test]
    fn test_var_without_value() {
        assert_eq!(compile("var x;").unwrap(), "x;");
    }

    #[test]
    fn test_var_and_array_select() {
        assert_eq!(
            compile_pretty("var x = [1, 2, 3];\nvar y = x[1];").unwrap(),
            "x = [1,2,3];\r\ny = (x select (1));\r\n"
        );
    }

    #[test]
    fn test_array_arithmetic_and_nesting() {
        assert_eq!(compile("var x = [1,2,3]-[2,3];").unwrap(), "x = [1,2,3]-[2,3];");
        assert_eq!(compile("var x = [[1], [], [a, b]];").unwrap(), "x = [[1],[],[a,b]];");
    }

    #[test]
    fn test_expression_operators_are_joined_without_spaces() {
        assert_eq!(
            compile("if x == y && x != y && x <= y && x >= y && x < y && x > y {}").unwrap(),
            "if (x==y&&x!=y&&x<=y&&x>=y&&x<y&&x>y) then {};"
        );
        assert_eq!(compile("var x = true || (3 >= 4 && 5 < 8);").unwrap(), "x = true||(3>=4&&5<8);");
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(compile("var x = !foo();").unwrap(), "x = !([] call foo);");
        assert_eq!(compile("var x = -[1, 2];").unwrap(), "x = -[1,2];");
        assert_eq!(compile("var x = -(a);").unwrap(), "x = -(a);");
    }

    #[test]
    fn test_user_call_forms() {
        assert_eq!(compile("foo();").unwrap(), "[] call foo;");
        assert_eq!(compile("foo(1, 2, 3);").unwrap(), "[1, 2, 3] call foo;");
        assert_eq!(compile("var x = foo(1);").unwrap(), "x = ([1] call foo);");
    }

    #[test]
    fn test_builtin_call_forms() {
        assert_eq!(compile("var v = radioVolume()();").unwrap(), "v = (radioVolume);");
        assert_eq!(compile("var r = unitReady()(soldier);").unwrap(), "r = (unitReady soldier);");
        assert_eq!(
            compile("setHit(someCar)(\"motor\", 1);").unwrap(),
            "someCar setHit [\"motor\", 1];"
        );
        assert_eq!(compile("setPos(a, b)();").unwrap(), "[a, b] setPos;");
    }

    #[test]
    fn test_nested_builtin_calls() {
        assert_eq!(
            compile("var _x = setHit(getVar(player, foo)(bar))(\"head\", \"tail\");").unwrap(),
            "_x = (([player, foo] getVar bar) setHit [\"head\", \"tail\"]);"
        );
    }

    #[test]
    fn test_registry_does_not_change_shape() {
        let registry = TypeRegistry::parse("b:OBJECT sethit ARRAY\nn:radiovolume\n");
        let source = "setHit(car)(\"motor\", 1); x = radioVolume()(); y = mystery(1)(2, 3);";
        let tokens = lexer::tokenize(source.as_bytes(), false);

        let with = Parser::new(&tokens, EmitConfig::dense())
            .with_registry(Some(&registry))
            .parse()
            .unwrap();
        let without = Parser::new(&tokens, EmitConfig::dense()).parse().unwrap();

        assert_eq!(with, without);
        assert_eq!(
            with,
            "car setHit [\"motor\", 1];x = (radioVolume);y = (1 mystery [2, 3]);"
        );
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            compile_pretty("if a < b { x = 1; } else { x = 2; }").unwrap(),
            "if (a<b) then {\r\nx = 1;\r\n} else {\r\nx = 2;\r\n};\r\n"
        );
    }

    #[test]
    fn test_while_has_no_trailing_line_break() {
        assert_eq!(compile_pretty("while true {}").unwrap(), "while {true} do {\r\n};");
        assert_eq!(
            compile_pretty("while i < 3 { i = i + 1; }").unwrap(),
            "while {i<3} do {\r\ni = i+1;\r\n};"
        );
    }

    #[test]
    fn test_switch_arms() {
        assert_eq!(
            compile_pretty("switch x { case 1: x = 1; case 2: default: x = 3; }").unwrap(),
            "switch (x) do {\r\ncase 1:\r\n{\r\nx = 1;\r\n};\r\ncase 2:\r\ndefault:\r\n{\r\nx = 3;\r\n};\r\n};\r\n"
        );
        assert_eq!(compile("switch x {}").unwrap(), "switch (x) do {};");
    }

    #[test]
    fn test_for_and_foreach() {
        assert_eq!(
            compile("for var i = 0; i < 100; i = i + 1 {}").unwrap(),
            "for [{i=0}, {i<100}, {i=i+1}] do {};"
        );
        assert_eq!(compile("foreach allUnits { hint(_x); }").unwrap(), "{[_x] call hint;} forEach (allUnits);");
        assert_eq!(
            compile_pretty("foreach unit => allUnits {}").unwrap(),
            "{\r\nunit = _x;\r\n} forEach (allUnits);\r\n"
        );
    }

    #[test]
    fn test_function_parameters() {
        assert_eq!(
            compile_pretty("func myFunc(a = 1, b = 2) { return a + b; }").unwrap(),
            "myFunc = {\r\nparams [[\"a\",1],[\"b\",2]];\r\nreturn a+b;\r\n};\r\n"
        );
        assert_eq!(
            compile("func f(a, b = -1, c) {}").unwrap(),
            "f = {params [\"a\",[\"b\",-1],\"c\"];};"
        );
        assert_eq!(compile("func f() { return 1; }").unwrap(), "f = {return 1;};");
    }

    #[test]
    fn test_try_exitwith_waituntil() {
        assert_eq!(compile_pretty("try {} catch {}").unwrap(), "try {\r\n} catch {\r\n};\r\n");
        assert_eq!(compile_pretty("exitwith {}").unwrap(), "if (true) exitWith {\r\n};\r\n");
        assert_eq!(
            compile_pretty("waituntil(x = x + 1; x < 100);").unwrap(),
            "waitUntil {x=x+1;x<100};\r\n"
        );
        assert_eq!(compile("waituntil(ready);").unwrap(), "waitUntil {ready};");
    }

    #[test]
    fn test_directive_always_on_its_own_line() {
        assert_eq!(
            compile("#define HELLO_WORLD \"Hello World!\"\nhint()(HELLO_WORLD);").unwrap(),
            "\r\n#define HELLO_WORLD \"Hello World!\"\r\nhint HELLO_WORLD;"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(compile("var x = code(\"var x = 5;\");").unwrap(), "x = {x = 5;};");
        assert_eq!(
            compile_pretty("var inline_code = code(\"var a = 1;var b = 2;if a < b {foo();}\");").unwrap(),
            "inline_code = {a = 1;b = 2;if (a<b) then {[] call foo;};};\r\n"
        );
        assert_eq!(compile("var x = code(\"\");").unwrap(), "x = {};");
        assert_eq!(compile("var x = code(\"  \");").unwrap(), "x = {};");
    }

    #[test]
    fn test_inline_code_unescapes_quotes() {
        assert_eq!(
            compile(r#"var x = code("hint()(\"hi\");");"#).unwrap(),
            r#"x = {hint "hi";};"#
        );
    }

    #[test]
    fn test_inline_code_error_propagates() {
        let err = compile_err("var x = code(\"if a {\");");
        assert_eq!(err, ParseError::eof("}"));
    }

    #[test]
    fn test_missing_closing_brace() {
        assert_eq!(compile_err("if a < b {"), ParseError::eof("}"));
    }

    #[test]
    fn test_missing_semicolon_reports_position() {
        let err = compile_err("var x = 1\nvar y = 2;");
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: ";".into(),
                found: "var".into(),
                line: 2,
                column: 1,
            }
        );
    }

    #[test]
    fn test_missing_closing_paren_in_call() {
        assert_eq!(compile_err("foo(1, 2;").expected(), ")");
        assert_eq!(compile_err("foo(1, 2").expected(), ")");
    }

    #[test]
    fn test_missing_closing_bracket() {
        assert_eq!(compile_err("var x = [1, 2;").expected(), "]");
    }

    #[test]
    fn test_stray_top_level_tokens() {
        assert_eq!(compile_err("x = 1; }").expected(), "end of input");
        assert_eq!(compile_err("case 1:").expected(), "end of input");
    }

    #[test]
    fn test_delimiter_is_not_an_expression() {
        let err = compile_err("var x = ;");
        assert_eq!(err.expected(), "expression");
        assert_eq!(err.found(), Some(";"));
    }

    #[test]
    fn test_switch_without_arm_keyword() {
        assert_eq!(compile_err("switch x { foo(); }").expected(), "case");
        assert_eq!(compile_err("switch x { case 1:").expected(), "}");
    }

    #[test]
    fn test_else_without_block() {
        assert_eq!(compile_err("if a {} else x = 1;").expected(), "{");
    }

    #[test]
    fn test_incomplete_logical_operator() {
        assert_eq!(compile_err("var x = a & b;").expected(), "&");
        assert_eq!(compile_err("var x = a ! b;").expected(), "=");
    }

    #[test]
    fn test_long_operator_chain_does_not_recurse() {
        let operands = vec!["1"; 50_000];
        let sqf = compile(&format!("var x = {};", operands.join("+"))).unwrap();
        assert_eq!(sqf, format!("x = {};", operands.join("+")));

        let mixed = (0..20_000).map(|i| i.to_string()).collect::<Vec<_>>().join("*2-");
        assert_eq!(compile(&format!("y = {mixed} >= 0 && z;")).unwrap(), format!("y = {mixed}>=0&&z;"));
    }
}
